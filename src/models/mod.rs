//! Domain models for the export reports.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`ResourceMetadata`] - Shared resource header block
//! - [`SecurityRuleRecord`] and [`Direction`] - Flattened NSG rule rows
//! - [`RouteRecord`] and [`SubnetRecord`] - Flattened route table rows

mod metadata;
mod nsg;
mod route_table;

// Re-export public types
pub use metadata::ResourceMetadata;
pub use nsg::{Direction, NsgReport, SecurityRuleRecord};
pub use route_table::{RouteRecord, RouteTableReport, SubnetRecord};
