//! Azure location code formatting.
//!
//! Maps location codes to their human-readable region names. The table is
//! static configuration covering the commercial, sovereign/government and
//! China partitions; anything it does not know gets a cosmetic best-effort
//! fallback instead of an error.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref REGION_NAMES: HashMap<&'static str, &'static str> = HashMap::from([
        // Australia / APAC
        ("australiaeast", "Australia East"),
        ("australiasoutheast", "Australia Southeast"),
        ("australiacentral", "Australia Central"),
        ("australiacentral2", "Australia Central 2"),
        ("southeastasia", "Southeast Asia"),
        ("eastasia", "East Asia"),
        ("japaneast", "Japan East"),
        ("japanwest", "Japan West"),
        ("koreacentral", "Korea Central"),
        ("koreasouth", "Korea South"),
        ("southindia", "South India"),
        ("centralindia", "Central India"),
        ("westindia", "West India"),
        // China (21Vianet)
        ("chinanorth", "China North"),
        ("chinanorth2", "China North 2"),
        ("chinaeast", "China East"),
        ("chinaeast2", "China East 2"),
        // Europe
        ("northeurope", "North Europe"),
        ("westeurope", "West Europe"),
        ("francecentral", "France Central"),
        ("francesouth", "France South"),
        ("germanynorth", "Germany North"),
        ("germanywestcentral", "Germany West Central"),
        ("norwayeast", "Norway East"),
        ("norwaywest", "Norway West"),
        ("swedencentral", "Sweden Central"),
        ("swedensouth", "Sweden South"),
        ("switzerlandnorth", "Switzerland North"),
        ("switzerlandwest", "Switzerland West"),
        ("polandcentral", "Poland Central"),
        ("italynorth", "Italy North"),
        ("spaincentral", "Spain Central"),
        ("ukwest", "UK West"),
        ("uksouth", "UK South"),
        // Americas
        ("eastus", "East US"),
        ("eastus2", "East US 2"),
        ("westus", "West US"),
        ("westus2", "West US 2"),
        ("westus3", "West US 3"),
        ("centralus", "Central US"),
        ("northcentralus", "North Central US"),
        ("southcentralus", "South Central US"),
        ("westcentralus", "West Central US"),
        ("canadacentral", "Canada Central"),
        ("canadaeast", "Canada East"),
        ("brazilsouth", "Brazil South"),
        ("brazilsoutheast", "Brazil Southeast"),
        ("mexicocentral", "Mexico Central"),
        ("chilecentral", "Chile Central"),
        // Middle East / Africa
        ("uaecentral", "UAE Central"),
        ("uaenorth", "UAE North"),
        ("qatarcentral", "Qatar Central"),
        ("southafricanorth", "South Africa North"),
        ("southafricawest", "South Africa West"),
        ("israelcentral", "Israel Central"),
        // US Government / DoD
        ("usgovvirginia", "US Gov Virginia"),
        ("usgovarizona", "US Gov Arizona"),
        ("usgoviowa", "US Gov Iowa"),
        ("usgovtexas", "US Gov Texas"),
        ("usdodeast", "US DoD East"),
        ("usdodcentral", "US DoD Central"),
        // Special / Edge
        ("global", "Global"),
        ("centraluseuap", "Central US EUAP"),
        ("eastus2euap", "East US 2 EUAP"),
    ]);

    // Lowercase letter followed by an uppercase letter or digit.
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z])([A-Z0-9])").expect("Invalid Regex?");
}

/// Convert an Azure location code into a human-friendly region name.
///
/// # Arguments
/// * `code` - Location code as found in the export, e.g. "eastus2"
///
/// # Returns
/// The display name from the static table, a derived best-effort name for
/// unknown codes, or an empty string for empty input.
pub fn format_location(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    let lower = code.to_lowercase();
    if let Some(name) = REGION_NAMES.get(lower.as_str()) {
        return (*name).to_string();
    }
    log::debug!("Unknown location code '{lower}', deriving a display name");

    // Fallback for unknown regions
    let cleaned = title_case(&lower);
    let cleaned = CAMEL_BOUNDARY.replace_all(&cleaned, "$1 $2");
    let cleaned = cleaned.replace("Azure ", "").replace('-', " ");
    title_case(&cleaned)
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}
