//! Integration tests for azure-network-report
//!
//! These tests verify the complete workflow from reading an export file to
//! writing the styled spreadsheet.

use azure_network_report::models::Direction;
use azure_network_report::output::{write_nsg_report, write_route_table_report};
use azure_network_report::{build_nsg_report, build_route_table_report};

#[test]
fn test_nsg_full_workflow() {
    let report = build_nsg_report("src/tests/test_data/nsg_test_export_01.json")
        .expect("Failed to build NSG report");

    assert_eq!(report.metadata.name, "app-nsg-prod");
    assert_eq!(report.metadata.resource_group, "rg-app-prod");
    assert_eq!(report.metadata.location, "Australia East");
    assert_eq!(
        report.metadata.subscription_id,
        "1111aaaa-2222-bbbb-3333-cccc4444dddd"
    );

    // 2 regular + 1 default rule, sorted Inbound first then by priority
    assert_eq!(report.rules.len(), 3, "Expected 3 merged rule records");
    assert_eq!(report.rules[0].rule_name, "Allow-Web-In");
    assert_eq!(report.rules[0].priority, 200);
    assert_eq!(report.rules[0].direction, Direction::Inbound);
    assert_eq!(report.rules[1].rule_name, "AllowVnetInBound");
    assert_eq!(report.rules[1].priority, 65000);
    assert_eq!(report.rules[2].rule_name, "Allow-DNS-Out");
    assert_eq!(report.rules[2].direction, Direction::Outbound);

    // Field normalization on the way in
    assert_eq!(report.rules[0].port, "80, 443");
    assert_eq!(report.rules[0].source, "AzureLoadBalancer");
    assert_eq!(report.rules[1].protocol, "Any");
    assert_eq!(report.rules[2].source, "Any");
    assert_eq!(report.rules[2].destination, "10.20.0.4, 10.20.0.5");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("nsg_report.xlsx");
    write_nsg_report(&report, &out).expect("Failed to write NSG spreadsheet");
    let written = std::fs::metadata(&out).expect("Spreadsheet file missing");
    assert!(written.len() > 0, "Spreadsheet should not be empty");
}

#[test]
fn test_route_table_full_workflow() {
    let report = build_route_table_report("src/tests/test_data/route_table_test_export_01.json")
        .expect("Failed to build route table report");

    assert_eq!(report.metadata.name, "rt-hub-prod");
    assert_eq!(report.metadata.resource_group, "rg-hub-prod");
    assert_eq!(report.metadata.location, "West Europe");

    assert_eq!(report.routes.len(), 2, "Expected 2 routes in source order");
    assert_eq!(report.routes[0].name, "default-to-firewall");
    assert_eq!(report.routes[0].next_hop_ip_address, "10.0.1.4");
    assert_eq!(report.routes[1].name, "drop-rfc1918");
    assert_eq!(report.routes[1].next_hop_ip_address, "");

    assert_eq!(report.subnets.len(), 2, "Expected 2 subnet associations");
    assert_eq!(report.subnets[0].name, "snet-web");
    assert_eq!(report.subnets[0].virtual_network, "vnet-app-prod");
    assert_eq!(report.subnets[0].security_group, "app-nsg-prod");
    assert_eq!(report.subnets[1].name, "snet-data");
    assert_eq!(report.subnets[1].security_group, "");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("route_table_report.xlsx");
    write_route_table_report(&report, &out).expect("Failed to write route table spreadsheet");
    assert!(out.exists(), "Spreadsheet file missing");
}

#[test]
fn test_export_without_properties_fails_before_any_output() {
    let err = build_nsg_report("src/tests/test_data/bad_export_01.json")
        .expect_err("Export without properties must be rejected");
    assert!(
        err.to_string().contains("properties"),
        "Error should mention the missing key: {err}"
    );
}
