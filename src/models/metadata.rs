//! Resource metadata shared by both report variants.

use crate::azure::{format_location, parse_resource_id};

/// Header block rendered above the record tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMetadata {
    /// Resource name used as the sheet title.
    pub name: String,
    /// Resource group parsed from the resource ID.
    pub resource_group: String,
    /// Display-formatted region name.
    pub location: String,
    /// Subscription ID parsed from the resource ID.
    pub subscription_id: String,
}

impl ResourceMetadata {
    /// Build metadata from the top-level export fields.
    ///
    /// # Arguments
    /// * `name` - Export `name`, falling back to `fallback_name` when absent
    /// * `id` - Full ARM resource ID
    /// * `location` - Raw location code
    pub fn from_export(name: Option<&str>, fallback_name: &str, id: &str, location: &str) -> Self {
        let (subscription_id, resource_group) = parse_resource_id(id);
        ResourceMetadata {
            name: name.unwrap_or(fallback_name).to_string(),
            resource_group,
            location: format_location(location),
            subscription_id,
        }
    }

    /// The labeled rows of the metadata block, in render order.
    pub fn rows(&self) -> [(&'static str, &str); 3] {
        [
            ("Resource group", &self.resource_group),
            ("Location", &self.location),
            ("Subscription ID", &self.subscription_id),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_export() {
        let meta = ResourceMetadata::from_export(
            Some("app-nsg"),
            "Unknown NSG",
            "/subscriptions/abc-123/resourceGroups/myRG/providers/x/y/app-nsg",
            "eastus2",
        );
        assert_eq!(meta.name, "app-nsg");
        assert_eq!(meta.resource_group, "myRG");
        assert_eq!(meta.location, "East US 2");
        assert_eq!(meta.subscription_id, "abc-123");
    }

    #[test]
    fn test_fallback_name_and_empty_id() {
        let meta = ResourceMetadata::from_export(None, "Unknown Route Table", "", "");
        assert_eq!(meta.name, "Unknown Route Table");
        assert_eq!(meta.resource_group, "");
        assert_eq!(meta.location, "");
        assert_eq!(meta.subscription_id, "");
    }

    #[test]
    fn test_rows_order() {
        let meta = ResourceMetadata::from_export(Some("n"), "f", "", "westus");
        let rows = meta.rows();
        assert_eq!(rows[0].0, "Resource group");
        assert_eq!(rows[1], ("Location", "West US"));
        assert_eq!(rows[2].0, "Subscription ID");
    }
}
