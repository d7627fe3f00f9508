//! Display normalization for rule field values.
//!
//! Azure uses a literal `"*"` token for "any", and models several fields as
//! either a singular value or a list depending on how the rule was authored.
//! Both shapes collapse to one display string here.

use itertools::Itertools;

/// Normalize a single value: a (possibly whitespace-padded) `"*"` becomes
/// `"Any"`, anything else passes through unchanged.
pub fn normalize_value(v: &str) -> String {
    if v.trim() == "*" {
        "Any".to_string()
    } else {
        v.to_string()
    }
}

/// Normalize a list-valued field: empty entries are dropped, the rest are
/// normalized and joined with `", "`.
pub fn normalize_list(items: &[String]) -> String {
    items
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| normalize_value(v))
        .join(", ")
}

/// Reconcile the list-or-singular field pair: prefer the list when it has
/// entries, else fall back to the singular value, else to `default`.
pub fn normalize_list_or_single(list: &[String], single: Option<&str>, default: &str) -> String {
    if list.is_empty() {
        normalize_value(single.unwrap_or(default))
    } else {
        normalize_list(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_becomes_any() {
        assert_eq!(normalize_value("*"), "Any");
        assert_eq!(normalize_value(" * "), "Any");
    }

    #[test]
    fn test_non_wildcard_unchanged() {
        assert_eq!(normalize_value("10.0.0.0/24"), "10.0.0.0/24");
        assert_eq!(normalize_value(""), "");
        assert_eq!(normalize_value("**"), "**");
    }

    #[test]
    fn test_list_join_drops_empty_entries() {
        let items = vec!["*".to_string(), "10.0.0.1".to_string(), String::new()];
        assert_eq!(normalize_list(&items), "Any, 10.0.0.1");
    }

    #[test]
    fn test_empty_list_is_empty_string() {
        assert_eq!(normalize_list(&[]), "");
        assert_eq!(normalize_list(&[String::new()]), "");
    }

    #[test]
    fn test_list_preferred_over_single() {
        let list = vec!["80".to_string(), "443".to_string()];
        assert_eq!(
            normalize_list_or_single(&list, Some("8080"), "Any"),
            "80, 443"
        );
    }

    #[test]
    fn test_single_fallback_then_default() {
        assert_eq!(normalize_list_or_single(&[], Some("8080"), "Any"), "8080");
        assert_eq!(normalize_list_or_single(&[], Some("*"), "Any"), "Any");
        assert_eq!(normalize_list_or_single(&[], None, "Any"), "Any");
    }
}
