//! Flattened route table rows.

use super::ResourceMetadata;

/// One row of the ROUTES sub-table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub name: String,
    pub address_prefix: String,
    pub next_hop_type: String,
    pub next_hop_ip_address: String,
}

/// One row of the SUBNETS sub-table. All fields are derived from the
/// subnet back-reference in the route table export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetRecord {
    /// Last path segment of the subnet ID.
    pub name: String,
    pub address_range: String,
    /// VNet name between the `/virtualNetworks/` and `/subnets/` markers.
    pub virtual_network: String,
    /// Last path segment of the associated NSG ID, empty when none.
    pub security_group: String,
}

/// Everything needed to render a route table spreadsheet.
#[derive(Debug, Clone)]
pub struct RouteTableReport {
    pub metadata: ResourceMetadata,
    /// Routes in source order.
    pub routes: Vec<RouteRecord>,
    /// Subnet associations in source order.
    pub subnets: Vec<SubnetRecord>,
}
