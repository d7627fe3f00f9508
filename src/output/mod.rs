//! Report rendering.
//!
//! This module turns the flattened records into the styled spreadsheet:
//! - [`xlsx`] - Single-sheet XLSX writer

mod xlsx;

pub use xlsx::{write_nsg_report, write_route_table_report};
