pub mod azure;
pub mod models;
pub mod output;
pub mod processing;
pub mod prompt;

use models::{NsgReport, ResourceMetadata, RouteTableReport};
use std::error::Error;

/// Read an NSG export file and build its report: metadata plus the merged,
/// sorted security rule records.
pub fn build_nsg_report(path: &str) -> Result<NsgReport, Box<dyn Error>> {
    let doc = azure::read_nsg_export(path)?;
    let metadata =
        ResourceMetadata::from_export(doc.name.as_deref(), "Unknown NSG", &doc.id, &doc.location);
    let rules = processing::extract_security_rules(&doc);
    Ok(NsgReport { metadata, rules })
}

/// Read a route table export file and build its report: metadata plus the
/// route and subnet records in source order.
pub fn build_route_table_report(path: &str) -> Result<RouteTableReport, Box<dyn Error>> {
    let doc = azure::read_route_table_export(path)?;
    let metadata = ResourceMetadata::from_export(
        doc.name.as_deref(),
        "Unknown Route Table",
        &doc.id,
        &doc.location,
    );
    let routes = processing::extract_routes(&doc);
    let subnets = processing::extract_subnets(&doc);
    Ok(RouteTableReport {
        metadata,
        routes,
        subnets,
    })
}
