//! Azure export parsing.
//!
//! This module handles the Azure-facing side of the converters:
//! - [`document`] - Reading and deserializing ARM JSON exports
//! - [`regions`] - Location code to display name formatting
//! - [`resource_id`] - Resource path string parsing

mod document;
mod regions;
mod resource_id;

// Re-export public types and functions
pub use document::{
    read_nsg_export, read_route_table_export, NsgExport, NsgProperties, RouteEntry,
    RouteTableExport, RuleEntry, SubnetEntry,
};
pub use regions::format_location;
pub use resource_id::{last_segment, parse_resource_id, segment_between};
