//! Flattened NSG rule rows.

use super::ResourceMetadata;
use std::fmt;

/// Traffic direction of a security rule.
///
/// Derived `Ord` places `Inbound` before `Outbound`, and any unrecognized
/// direction string after both, which is the sort policy the reports use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Direction {
    Inbound,
    Outbound,
    /// Unrecognized direction, kept verbatim for display.
    Other(String),
}

impl Direction {
    pub fn parse(raw: &str) -> Direction {
        match raw {
            "Inbound" => Direction::Inbound,
            "Outbound" => Direction::Outbound,
            other => Direction::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Direction::Inbound => "Inbound",
            Direction::Outbound => "Outbound",
            Direction::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One spreadsheet row of the NSG report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityRuleRecord {
    pub priority: i64,
    pub direction: Direction,
    pub rule_name: String,
    /// Wildcard-normalized, possibly comma-joined port ranges.
    pub port: String,
    pub protocol: String,
    pub source: String,
    pub destination: String,
    pub access: String,
    pub description: String,
}

/// Everything needed to render an NSG spreadsheet.
#[derive(Debug, Clone)]
pub struct NsgReport {
    pub metadata: ResourceMetadata,
    /// Regular and default rules merged, sorted by (direction, priority).
    pub rules: Vec<SecurityRuleRecord>,
}
