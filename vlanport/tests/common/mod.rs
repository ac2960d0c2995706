//! Common test utilities for integration tests.
//!
//! This module provides fixture builders shared by the vlanport
//! integration tests.

use vlanport::records::AvailabilityRow;
use vlanport::{Device, Inventory, InventoryBuilder, Request, Vlan};

/// Availability rows for the reference scenario, deliberately unsorted.
///
/// VLAN 1: device 3 (primary); VLAN 2: device 0 (both); VLAN 5: device 0
/// (primary); VLAN 6: device 1 (secondary); VLAN 8: device 0 (primary),
/// device 1 (secondary), device 2 (primary).
#[allow(dead_code)]
pub fn sample_rows() -> Vec<AvailabilityRow> {
    vec![
        AvailabilityRow::new("8", "0", "1"),
        AvailabilityRow::new("1", "3", "1"),
        AvailabilityRow::new("2", "0", "1"),
        AvailabilityRow::new("5", "0", "1"),
        AvailabilityRow::new("2", "0", "0"),
        AvailabilityRow::new("6", "1", "0"),
        AvailabilityRow::new("8", "1", "0"),
        AvailabilityRow::new("8", "2", "1"),
    ]
}

/// The inventory built from [`sample_rows`].
#[allow(dead_code)]
pub fn sample_inventory() -> Inventory {
    InventoryBuilder::from_rows((1..).zip(sample_rows())).inventory
}

/// The expected VLANs of [`sample_inventory`], in allocation order.
#[allow(dead_code)]
pub fn sample_vlans() -> Vec<Vlan> {
    vec![
        Vlan::new(1, vec![Device::new(3, true, false)]),
        Vlan::new(2, vec![Device::new(0, true, true)]),
        Vlan::new(5, vec![Device::new(0, true, false)]),
        Vlan::new(6, vec![Device::new(1, false, true)]),
        Vlan::new(
            8,
            vec![
                Device::new(0, true, false),
                Device::new(1, false, true),
                Device::new(2, true, false),
            ],
        ),
    ]
}

/// Builds requests from `(id, redundant)` pairs.
#[allow(dead_code)]
pub fn requests(entries: &[(&str, bool)]) -> Vec<Request> {
    entries
        .iter()
        .map(|(id, redundant)| Request::new(*id, *redundant))
        .collect()
}

/// Flattens output rows into comparable tuples.
#[allow(dead_code)]
pub fn row_tuples(outcome: &vlanport::ProcessOutcome) -> Vec<(String, i64, u8, i64)> {
    outcome
        .output_rows()
        .into_iter()
        .map(|r| (r.request_id, r.device_id, r.primary_port, r.vlan_id))
        .collect()
}
