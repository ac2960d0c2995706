//! Greedy port allocation over an [`Inventory`].
//!
//! [`reserve`] scans VLANs in ascending id order and, within each VLAN,
//! devices in ascending id order. The first device eligible for the request
//! mode wins:
//!
//! - **Redundant** requests need both ports. Only the matched device is
//!   evicted; devices skipped on the way may still serve a later
//!   non-redundant request.
//! - **Non-redundant** requests need the primary port. The matched device is
//!   evicted together with every lower-id device of its VLAN. Those were
//!   scanned and rejected, so they lack a primary port and can never be
//!   allocated again in either mode.
//!
//! A VLAN left without devices is removed from the inventory. The scan runs
//! to completion before anything is mutated.

use std::fmt;

use crate::inventory::{DeviceId, Inventory, VlanId};

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// A device chosen to serve a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Allocation {
    /// Chosen device.
    pub device_id: DeviceId,
    /// VLAN hosting the chosen device.
    pub vlan_id: VlanId,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device {} on VLAN {}", self.device_id, self.vlan_id)
    }
}

/// Finds and consumes the next device eligible for the request mode.
///
/// Returns `None` when no remaining device satisfies the mode; the
/// inventory is left untouched in that case. `None` means no further
/// allocations of this mode are possible, not that something went wrong.
///
/// # Examples
///
/// ```
/// use vlanport::{allocator, Device, Inventory, Vlan};
///
/// let mut inventory = Inventory::new(vec![
///     Vlan::new(6, vec![Device::new(1, false, true)]),
///     Vlan::new(8, vec![Device::new(0, true, false), Device::new(1, false, true)]),
/// ]);
///
/// // Nothing has both ports.
/// assert!(allocator::reserve(&mut inventory, true).is_none());
///
/// let allocation = allocator::reserve(&mut inventory, false).unwrap();
/// assert_eq!((allocation.device_id, allocation.vlan_id), (0, 8));
/// ```
pub fn reserve(inventory: &mut Inventory, redundant: bool) -> Option<Allocation> {
    let (vlan_index, device_index) = find_eligible(inventory, redundant)?;

    let vlan_id = inventory.vlans()[vlan_index].id();
    let device_id = inventory.vlans()[vlan_index].devices()[device_index].id();

    if redundant {
        inventory.evict_device_at(vlan_index, device_index);
    } else {
        let evicted = inventory.evict_prefix_through_at(vlan_index, device_index);
        if evicted.len() > 1 {
            log::debug!(
                "evicted {} device(s) without a primary port from VLAN {vlan_id}",
                evicted.len() - 1
            );
        }
    }

    let allocation = Allocation { device_id, vlan_id };
    log::debug!(
        "reserved {allocation} ({})",
        if redundant { "redundant" } else { "non-redundant" }
    );
    Some(allocation)
}

/// Position of the first eligible device as `(vlan_index, device_index)`.
fn find_eligible(inventory: &Inventory, redundant: bool) -> Option<(usize, usize)> {
    inventory
        .vlans()
        .iter()
        .enumerate()
        .find_map(|(vlan_index, vlan)| {
            vlan.devices()
                .iter()
                .position(|device| device.is_eligible(redundant))
                .map(|device_index| (vlan_index, device_index))
        })
}

impl Inventory {
    /// Finds and consumes the next eligible device; see [`reserve`].
    pub fn reserve(&mut self, redundant: bool) -> Option<Allocation> {
        reserve(self, redundant)
    }
}
