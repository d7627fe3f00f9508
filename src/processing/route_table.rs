//! Route and subnet extraction.
//!
//! Two independent flattenings of one route table export. Neither is
//! sorted; source order is what the portal shows.

use crate::azure::{last_segment, segment_between, RouteTableExport};
use crate::models::{RouteRecord, SubnetRecord};

/// One record per `properties.routes` entry, missing fields as empty strings.
pub fn extract_routes(doc: &RouteTableExport) -> Vec<RouteRecord> {
    let routes: Vec<RouteRecord> = doc
        .properties
        .routes
        .iter()
        .map(|r| RouteRecord {
            name: r.name.clone(),
            address_prefix: r.properties.address_prefix.clone(),
            next_hop_type: r.properties.next_hop_type.clone(),
            next_hop_ip_address: r.properties.next_hop_ip_address.clone(),
        })
        .collect();
    log::info!("Extracted {} routes", routes.len());
    routes
}

/// One record per `properties.subnets` entry; name, VNet and security group
/// are derived from the resource ID paths.
pub fn extract_subnets(doc: &RouteTableExport) -> Vec<SubnetRecord> {
    let subnets: Vec<SubnetRecord> = doc
        .properties
        .subnets
        .iter()
        .map(|s| SubnetRecord {
            name: last_segment(&s.id).to_string(),
            address_range: s.properties.address_prefix.clone(),
            virtual_network: segment_between(&s.id, "/virtualNetworks/", "/subnets/").to_string(),
            security_group: s
                .properties
                .network_security_group
                .as_ref()
                .map(|nsg| last_segment(&nsg.id).to_string())
                .unwrap_or_default(),
        })
        .collect();
    log::info!("Extracted {} subnet associations", subnets.len());
    subnets
}
