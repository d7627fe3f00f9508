//! Deserialization of Azure Resource Manager JSON exports.
//!
//! The export files are small and human-curated, so each reader slurps the
//! whole file, closes it, and only then deserializes. A document without a
//! `properties` object is unusable and fails deserialization outright;
//! everything below `properties` is optional and defaults to empty.

use serde::Deserialize;
use std::error::Error;

/// An exported Network Security Group document.
#[derive(Deserialize, Debug)]
pub struct NsgExport {
    /// Resource name, absent in some hand-trimmed exports.
    #[serde(default)]
    pub name: Option<String>,
    /// Full ARM resource ID path.
    #[serde(default)]
    pub id: String,
    /// Azure location code, e.g. "australiaeast".
    #[serde(default)]
    pub location: String,
    /// Required: an export without properties cannot be reported on.
    pub properties: NsgProperties,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NsgProperties {
    #[serde(default)]
    pub security_rules: Vec<RuleEntry>,
    #[serde(default)]
    pub default_security_rules: Vec<RuleEntry>,
}

/// One entry of `securityRules` / `defaultSecurityRules`.
#[derive(Deserialize, Debug, Default)]
pub struct RuleEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: RuleProperties,
}

/// Rule detail. Azure emits either the plural list fields or the singular
/// ones, never meaningfully both, so both shapes are kept and reconciled
/// during extraction.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuleProperties {
    /// Usually a JSON number, but hand-edited exports sometimes quote it.
    #[serde(default, deserialize_with = "priority_number_or_string")]
    pub priority: Option<i64>,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub destination_port_range: Option<String>,
    #[serde(default)]
    pub destination_port_ranges: Vec<String>,
    #[serde(default)]
    pub source_address_prefix: Option<String>,
    #[serde(default)]
    pub source_address_prefixes: Vec<String>,
    #[serde(default)]
    pub destination_address_prefix: Option<String>,
    #[serde(default)]
    pub destination_address_prefixes: Vec<String>,
}

/// Coerce a rule priority given as either a JSON number or a numeric string.
fn priority_number_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid priority '{s}': {e}"))),
    }
}

/// An exported Route Table document.
#[derive(Deserialize, Debug)]
pub struct RouteTableExport {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub location: String,
    pub properties: RouteTableProperties,
}

#[derive(Deserialize, Debug, Default)]
pub struct RouteTableProperties {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
    #[serde(default)]
    pub subnets: Vec<SubnetEntry>,
}

/// One entry of `properties.routes`.
#[derive(Deserialize, Debug, Default)]
pub struct RouteEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: RouteProperties,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RouteProperties {
    #[serde(default)]
    pub address_prefix: String,
    #[serde(default)]
    pub next_hop_type: String,
    #[serde(default)]
    pub next_hop_ip_address: String,
}

/// One entry of `properties.subnets`. These are back-references, so the
/// interesting data lives in the `id` path itself.
#[derive(Deserialize, Debug, Default)]
pub struct SubnetEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub properties: SubnetProperties,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubnetProperties {
    #[serde(default)]
    pub address_prefix: String,
    #[serde(default)]
    pub network_security_group: Option<ResourceRef>,
}

/// Bare `{ "id": ... }` reference to another resource.
#[derive(Deserialize, Debug, Default)]
pub struct ResourceRef {
    #[serde(default)]
    pub id: String,
}

/// Read and deserialize an NSG export file.
pub fn read_nsg_export(path: &str) -> Result<NsgExport, Box<dyn Error>> {
    log::info!("Reading NSG export: {path}");
    deserialize_export(path)
}

/// Read and deserialize a Route Table export file.
pub fn read_route_table_export(path: &str) -> Result<RouteTableExport, Box<dyn Error>> {
    log::info!("Reading route table export: {path}");
    deserialize_export(path)
}

fn deserialize_export<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading export file {path}: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let document = match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(doc) => doc,
        Err(e) => {
            let json_path = e.path().to_string();
            log::error!("Export {path} is not a usable ARM export (at {json_path})");
            return Err(format!("Error parsing export {path} at {json_path}: {e}").into());
        }
    };
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_nsg_export() {
        let doc = read_nsg_export("src/tests/test_data/nsg_test_export_01.json")
            .expect("Error reading NSG test export");
        assert_eq!(doc.name.as_deref(), Some("app-nsg-prod"));
        assert_eq!(doc.location, "australiaeast");
        assert_eq!(doc.properties.security_rules.len(), 2);
        assert_eq!(doc.properties.default_security_rules.len(), 1);
    }

    #[test]
    fn test_read_route_table_export() {
        let doc = read_route_table_export("src/tests/test_data/route_table_test_export_01.json")
            .expect("Error reading route table test export");
        assert_eq!(doc.name.as_deref(), Some("rt-hub-prod"));
        assert_eq!(doc.properties.routes.len(), 2);
        assert_eq!(doc.properties.subnets.len(), 2);
    }

    #[test]
    fn test_missing_properties_is_fatal() {
        let err = read_nsg_export("src/tests/test_data/bad_export_01.json")
            .expect_err("Export without properties should fail");
        assert!(
            err.to_string().contains("properties"),
            "Error should name the missing key: {err}"
        );
    }

    #[test]
    fn test_string_priority_is_coerced() {
        let rule: RuleEntry = serde_json::from_value(serde_json::json!({
            "name": "quoted",
            "properties": {"direction": "Inbound", "priority": "200"}
        }))
        .expect("String priority should deserialize");
        assert_eq!(rule.properties.priority, Some(200));
    }

    #[test]
    fn test_non_numeric_priority_is_rejected() {
        let result = serde_json::from_value::<RuleEntry>(serde_json::json!({
            "name": "bad",
            "properties": {"priority": "high"}
        }));
        assert!(result.is_err(), "Non-numeric priority should fail to parse");
    }

    #[test]
    fn test_missing_file() {
        assert!(read_nsg_export("src/tests/test_data/no_such_file.json").is_err());
    }
}
