//! ARM resource path parsing.
//!
//! Resource IDs are slash-delimited paths of the form
//! `/subscriptions/{subId}/resourceGroups/{rg}/providers/...`. Everything
//! here is lenient: a short or marker-less path yields empty strings, never
//! an error.

/// Extract the subscription ID and resource group from a resource path.
///
/// # Arguments
/// * `id` - Full resource ID, possibly empty
///
/// # Returns
/// `(subscription_id, resource_group)`, each empty when not present.
pub fn parse_resource_id(id: &str) -> (String, String) {
    if id.is_empty() {
        return (String::new(), String::new());
    }
    // "/subscriptions/{subId}/..." splits to ["", "subscriptions", subId, ..]
    let subscription_id = id.split('/').nth(2).unwrap_or("").to_string();
    let resource_group = segment_after(id, "/resourceGroups/").to_string();
    (subscription_id, resource_group)
}

/// The final `/`-delimited segment of a resource path.
pub fn last_segment(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or("")
}

/// The text between two literal markers.
///
/// Empty when `start` is absent. When only `end` is absent, the remainder
/// after `start` is returned.
pub fn segment_between<'a>(id: &'a str, start: &str, end: &str) -> &'a str {
    match id.find(start) {
        Some(i) => {
            let rest = &id[i + start.len()..];
            match rest.find(end) {
                Some(j) => &rest[..j],
                None => rest,
            }
        }
        None => "",
    }
}

/// The path segment immediately following a literal marker.
fn segment_after<'a>(id: &'a str, marker: &str) -> &'a str {
    match id.find(marker) {
        Some(i) => {
            let rest = &id[i + marker.len()..];
            rest.split('/').next().unwrap_or("")
        }
        None => "",
    }
}
