//! Record extraction and normalization logic.
//!
//! This module contains the business logic that flattens a parsed export
//! into tabular records:
//! - [`normalize`] - Wildcard and multi-valued field normalization
//! - [`nsg`] - Security rule extraction and sorting
//! - [`route_table`] - Route and subnet extraction

mod normalize;
mod nsg;
mod route_table;

// Re-export public functions
pub use normalize::{normalize_list, normalize_list_or_single, normalize_value};
pub use nsg::extract_security_rules;
pub use route_table::{extract_routes, extract_subnets};
