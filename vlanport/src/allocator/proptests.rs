//! Property-based tests for the greedy reservation scan.

use super::reserve;
use crate::inventory::{Device, DeviceId, Inventory, Vlan, VlanId};
use proptest::prelude::*;

// Strategy for generating inventories with mixed port availability
fn inventory_strategy() -> impl Strategy<Value = Inventory> {
    prop::collection::vec(
        (
            0i64..8,
            prop::collection::vec((0i64..8, any::<bool>(), any::<bool>()), 1..6),
        ),
        0..6,
    )
    .prop_map(|vlans| {
        Inventory::new(vlans.into_iter().map(|(vlan_id, devices)| {
            Vlan::new(
                vlan_id,
                devices
                    .into_iter()
                    .map(|(id, primary, secondary)| Device::new(id, primary, secondary))
                    .collect(),
            )
        }))
    })
}

fn flatten(inventory: &Inventory) -> Vec<(VlanId, Device)> {
    inventory
        .vlans()
        .iter()
        .flat_map(|vlan| vlan.devices().iter().map(move |d| (vlan.id(), *d)))
        .collect()
}

fn keys(devices: &[(VlanId, Device)]) -> Vec<(VlanId, DeviceId)> {
    devices.iter().map(|(v, d)| (*v, d.id())).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Non-redundant picks the smallest (vlan, device) with a primary port and
    // drops exactly the primary-less devices before it in the same VLAN
    #[test]
    fn non_redundant_picks_smallest_primary(inventory in inventory_strategy()) {
        let before = flatten(&inventory);
        let mut inventory = inventory;
        let result = reserve(&mut inventory, false);
        let after = flatten(&inventory);

        let expected = before.iter().find(|(_, d)| d.has_primary()).copied();
        match (result, expected) {
            (None, None) => prop_assert_eq!(after, before),
            (Some(allocation), Some((vlan_id, device))) => {
                prop_assert_eq!(allocation.vlan_id, vlan_id);
                prop_assert_eq!(allocation.device_id, device.id());

                let survivors: Vec<_> = before
                    .iter()
                    .filter(|(v, d)| *v != vlan_id || d.id() > device.id())
                    .copied()
                    .collect();
                prop_assert_eq!(keys(&after), keys(&survivors));

                for (v, d) in &before {
                    if *v == vlan_id && d.id() < device.id() {
                        prop_assert!(!d.has_primary());
                    }
                }
            }
            (result, expected) => prop_assert!(false, "got {:?}, expected {:?}", result, expected),
        }
    }

    // Redundant picks the smallest fully-free device and removes nothing else
    #[test]
    fn redundant_picks_smallest_pair(inventory in inventory_strategy()) {
        let before = flatten(&inventory);
        let mut inventory = inventory;
        let result = reserve(&mut inventory, true);
        let after = flatten(&inventory);

        let expected = before.iter().find(|(_, d)| d.is_redundant()).copied();
        match (result, expected) {
            (None, None) => prop_assert_eq!(after, before),
            (Some(allocation), Some((vlan_id, device))) => {
                prop_assert_eq!(allocation.vlan_id, vlan_id);
                prop_assert_eq!(allocation.device_id, device.id());

                let survivors: Vec<_> = before
                    .iter()
                    .filter(|(v, d)| !(*v == vlan_id && d.id() == device.id()))
                    .copied()
                    .collect();
                prop_assert_eq!(after, survivors);
            }
            (result, expected) => prop_assert!(false, "got {:?}, expected {:?}", result, expected),
        }
    }

    // Draining the inventory never leaves an empty VLAN behind
    #[test]
    fn drained_inventory_has_no_empty_vlans(
        inventory in inventory_strategy(),
        modes in prop::collection::vec(any::<bool>(), 0..40)
    ) {
        let mut inventory = inventory;
        for redundant in modes {
            let _ = reserve(&mut inventory, redundant);
            prop_assert!(inventory.vlans().iter().all(|v| !v.is_empty()));
        }
    }
}
