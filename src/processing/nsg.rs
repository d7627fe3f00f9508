//! Security rule extraction.
//!
//! Flattens the regular and default rule lists of an NSG export into
//! display records, then sorts them the way the report presents them:
//! Inbound before Outbound, ascending priority within each direction.

use super::normalize::{normalize_list_or_single, normalize_value};
use crate::azure::{NsgExport, RuleEntry};
use crate::models::{Direction, SecurityRuleRecord};

/// Flatten and sort all rules of an NSG export.
///
/// Regular rules come first, default rules are appended, then the combined
/// list is stably sorted by (direction, priority). Unrecognized direction
/// strings sort after the two known directions.
pub fn extract_security_rules(doc: &NsgExport) -> Vec<SecurityRuleRecord> {
    let mut records: Vec<SecurityRuleRecord> = doc
        .properties
        .security_rules
        .iter()
        .chain(doc.properties.default_security_rules.iter())
        .map(rule_record)
        .collect();

    records.sort_by(|a, b| {
        a.direction
            .cmp(&b.direction)
            .then(a.priority.cmp(&b.priority))
    });
    log::info!("Extracted {} security rules", records.len());
    records
}

fn rule_record(rule: &RuleEntry) -> SecurityRuleRecord {
    let p = &rule.properties;
    SecurityRuleRecord {
        priority: p.priority.unwrap_or(0),
        direction: Direction::parse(&p.direction),
        rule_name: rule.name.clone(),
        port: normalize_list_or_single(
            &p.destination_port_ranges,
            p.destination_port_range.as_deref(),
            "Any",
        ),
        protocol: normalize_value(&p.protocol),
        source: normalize_list_or_single(
            &p.source_address_prefixes,
            p.source_address_prefix.as_deref(),
            "Any",
        ),
        destination: normalize_list_or_single(
            &p.destination_address_prefixes,
            p.destination_address_prefix.as_deref(),
            "Any",
        ),
        access: p.access.clone(),
        description: p.description.clone(),
    }
}
