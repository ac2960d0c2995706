//! Property-based tests for inventory construction.

use super::{Inventory, InventoryBuilder};
use crate::records::AvailabilityRow;
use crate::reservation::PortKind;
use proptest::prelude::*;
use std::collections::BTreeMap;

// Strategy for generating small availability declarations
fn declaration_strategy() -> impl Strategy<Value = Vec<(i64, i64, bool)>> {
    prop::collection::vec((-3i64..12, -3i64..12, any::<bool>()), 0..60)
}

fn build(declarations: &[(i64, i64, bool)]) -> Inventory {
    let mut builder = InventoryBuilder::new();
    for &(vlan_id, device_id, primary) in declarations {
        let port = if primary {
            PortKind::Primary
        } else {
            PortKind::Secondary
        };
        builder.add(vlan_id, device_id, port);
    }
    builder.build()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // VLANs and devices come out strictly ascending, and nothing is empty
    #[test]
    fn build_is_strictly_sorted(declarations in declaration_strategy()) {
        let inventory = build(&declarations);

        for pair in inventory.vlans().windows(2) {
            prop_assert!(pair[0].id() < pair[1].id());
        }
        for vlan in inventory.vlans() {
            prop_assert!(!vlan.is_empty());
            for pair in vlan.devices().windows(2) {
                prop_assert!(pair[0].id() < pair[1].id());
            }
        }
    }

    // Flags are the OR of every declaration for that device
    #[test]
    fn build_matches_or_aggregate(declarations in declaration_strategy()) {
        let inventory = build(&declarations);

        let mut expected: BTreeMap<(i64, i64), (bool, bool)> = BTreeMap::new();
        for &(vlan_id, device_id, primary) in &declarations {
            let flags = expected.entry((vlan_id, device_id)).or_default();
            if primary {
                flags.0 = true;
            } else {
                flags.1 = true;
            }
        }

        let actual: BTreeMap<(i64, i64), (bool, bool)> = inventory
            .vlans()
            .iter()
            .flat_map(|vlan| {
                vlan.devices()
                    .iter()
                    .map(move |d| ((vlan.id(), d.id()), (d.has_primary(), d.has_secondary())))
            })
            .collect();

        prop_assert_eq!(actual, expected);
    }

    // Shuffling the input rows never changes the result
    #[test]
    fn build_is_order_independent(
        declarations in declaration_strategy(),
        seed in any::<u64>()
    ) {
        let mut shuffled = declarations.clone();
        if !shuffled.is_empty() {
            let len = shuffled.len();
            let mut state = seed;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                let j = usize::try_from(state % (i as u64 + 1)).unwrap();
                shuffled.swap(i, j);
            }
        }
        prop_assert_eq!(build(&declarations), build(&shuffled));
    }

    // Rows with a non-integer field never reach the inventory
    #[test]
    fn malformed_rows_are_skipped(
        declarations in declaration_strategy(),
        garbage in "[a-z]{1,4}"
    ) {
        let mut rows: Vec<AvailabilityRow> = declarations
            .iter()
            .map(|&(v, d, p)| AvailabilityRow::new(v.to_string(), d.to_string(), u8::from(p).to_string()))
            .collect();
        rows.push(AvailabilityRow::new("99", garbage.clone(), "1"));
        rows.push(AvailabilityRow::new(garbage, "99", "1"));

        let report = InventoryBuilder::from_rows((1..).zip(rows));
        prop_assert_eq!(report.skipped.len(), 2);
        prop_assert_eq!(report.rows_accepted, declarations.len());
        prop_assert_eq!(report.inventory, build(&declarations));
    }
}
