//! Inventory of VLANs, devices and their free port slots.
//!
//! The inventory is an ordered sequence of VLANs sorted by id, each holding
//! a non-empty sequence of devices sorted by id. That ordering is the
//! allocation priority. Consumption is represented by deleting devices (and
//! VLANs that become empty), never by clearing a flag.

use std::fmt;

use serde::Serialize;

pub mod builder;
#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::{BuildReport, InventoryBuilder};

/// Identifier of a VLAN.
pub type VlanId = i64;

/// Identifier of a device, unique within its VLAN.
pub type DeviceId = i64;

/// A device and which of its two port slots are still free.
///
/// # Examples
///
/// ```
/// use vlanport::Device;
///
/// let device = Device::new(4, true, false);
/// assert!(device.has_primary());
/// assert!(!device.is_redundant());
/// assert_eq!(device.to_string(), "device 4 [primary]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Device {
    id: DeviceId,
    has_primary: bool,
    has_secondary: bool,
}

impl Device {
    /// Creates a new device.
    #[must_use]
    pub const fn new(id: DeviceId, has_primary: bool, has_secondary: bool) -> Self {
        Self {
            id,
            has_primary,
            has_secondary,
        }
    }

    /// Returns the device id.
    #[must_use]
    pub const fn id(self) -> DeviceId {
        self.id
    }

    /// Returns `true` if the primary port is free.
    #[must_use]
    pub const fn has_primary(self) -> bool {
        self.has_primary
    }

    /// Returns `true` if the secondary port is free.
    #[must_use]
    pub const fn has_secondary(self) -> bool {
        self.has_secondary
    }

    /// Returns `true` if both ports are free.
    #[must_use]
    pub const fn is_redundant(self) -> bool {
        self.has_primary && self.has_secondary
    }

    /// Returns `true` if this device can serve a request of the given mode.
    ///
    /// Redundant requests need both ports; non-redundant ones only the
    /// primary.
    #[must_use]
    pub const fn is_eligible(self, redundant: bool) -> bool {
        if redundant {
            self.is_redundant()
        } else {
            self.has_primary
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ports = match (self.has_primary, self.has_secondary) {
            (true, true) => "primary, secondary",
            (true, false) => "primary",
            (false, true) => "secondary",
            (false, false) => "none",
        };
        write!(f, "device {} [{ports}]", self.id)
    }
}

/// A VLAN and its devices, sorted ascending by device id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vlan {
    id: VlanId,
    devices: Vec<Device>,
}

impl Vlan {
    /// Creates a VLAN from devices in any order.
    ///
    /// Devices are sorted by id; repeated ids are merged by OR-ing their
    /// port flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlanport::{Device, Vlan};
    ///
    /// let vlan = Vlan::new(8, vec![Device::new(2, true, false), Device::new(0, false, true)]);
    /// let ids: Vec<_> = vlan.devices().iter().map(|d| d.id()).collect();
    /// assert_eq!(ids, vec![0, 2]);
    /// ```
    #[must_use]
    pub fn new(id: VlanId, mut devices: Vec<Device>) -> Self {
        devices.sort_by_key(|d| d.id);
        devices.dedup_by(|later, earlier| {
            if later.id == earlier.id {
                earlier.has_primary |= later.has_primary;
                earlier.has_secondary |= later.has_secondary;
                true
            } else {
                false
            }
        });
        Self { id, devices }
    }

    /// Returns the VLAN id.
    #[must_use]
    pub const fn id(&self) -> VlanId {
        self.id
    }

    /// Returns the remaining devices, in allocation order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Looks up a device by id.
    #[must_use]
    pub fn device(&self, device_id: DeviceId) -> Option<&Device> {
        self.position(device_id).map(|i| &self.devices[i])
    }

    /// Returns `true` if no devices remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    fn position(&self, device_id: DeviceId) -> Option<usize> {
        self.devices.binary_search_by_key(&device_id, |d| d.id).ok()
    }
}

impl fmt::Display for Vlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VLAN {}:", self.id)?;
        for (i, device) in self.devices.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{device}")?;
        }
        Ok(())
    }
}

/// The mutable collection of VLANs available for allocation.
///
/// # Examples
///
/// ```
/// use vlanport::{Device, Inventory, Vlan};
///
/// let mut inventory = Inventory::new(vec![
///     Vlan::new(2, vec![Device::new(0, true, true)]),
///     Vlan::new(1, vec![Device::new(3, true, false)]),
/// ]);
/// assert_eq!(inventory.vlans()[0].id(), 1);
///
/// let allocation = inventory.reserve(false).unwrap();
/// assert_eq!((allocation.device_id, allocation.vlan_id), (3, 1));
/// assert!(inventory.vlan(1).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    vlans: Vec<Vlan>,
}

impl Inventory {
    /// Creates an inventory from VLANs in any order.
    ///
    /// VLANs are sorted by id, repeated VLAN ids are merged, and VLANs or
    /// devices without any free port are dropped.
    #[must_use]
    pub fn new(vlans: impl IntoIterator<Item = Vlan>) -> Self {
        let mut builder = InventoryBuilder::new();
        for vlan in vlans {
            for device in vlan.devices {
                builder.add_device(vlan.id, device);
            }
        }
        builder.build()
    }

    /// Returns the VLANs, in allocation order.
    #[must_use]
    pub fn vlans(&self) -> &[Vlan] {
        &self.vlans
    }

    /// Looks up a VLAN by id.
    #[must_use]
    pub fn vlan(&self, vlan_id: VlanId) -> Option<&Vlan> {
        self.position(vlan_id).map(|i| &self.vlans[i])
    }

    /// Returns `true` if no VLANs remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vlans.is_empty()
    }

    /// Number of VLANs remaining.
    #[must_use]
    pub fn vlan_count(&self) -> usize {
        self.vlans.len()
    }

    /// Number of devices remaining across all VLANs.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.vlans.iter().map(|v| v.devices.len()).sum()
    }

    /// Removes one device, and its VLAN if that leaves it empty.
    ///
    /// Returns the removed device, or `None` if it was not present.
    pub fn evict_device(&mut self, vlan_id: VlanId, device_id: DeviceId) -> Option<Device> {
        let vlan_index = self.position(vlan_id)?;
        let device_index = self.vlans[vlan_index].position(device_id)?;
        Some(self.evict_device_at(vlan_index, device_index))
    }

    /// Removes a device and every lower-id device of the same VLAN, and the
    /// VLAN if that leaves it empty.
    ///
    /// Returns the removed devices in ascending id order; empty if the device
    /// was not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlanport::{Device, Inventory, Vlan};
    ///
    /// let mut inventory = Inventory::new(vec![Vlan::new(
    ///     8,
    ///     vec![Device::new(0, true, false), Device::new(1, false, true), Device::new(2, true, false)],
    /// )]);
    /// let evicted = inventory.evict_prefix_through(8, 1);
    /// assert_eq!(evicted.len(), 2);
    /// assert_eq!(inventory.device_count(), 1);
    /// ```
    pub fn evict_prefix_through(&mut self, vlan_id: VlanId, device_id: DeviceId) -> Vec<Device> {
        let Some(vlan_index) = self.position(vlan_id) else {
            return Vec::new();
        };
        let Some(device_index) = self.vlans[vlan_index].position(device_id) else {
            return Vec::new();
        };
        self.evict_prefix_through_at(vlan_index, device_index)
    }

    pub(crate) fn evict_device_at(&mut self, vlan_index: usize, device_index: usize) -> Device {
        let evicted = self.vlans[vlan_index].devices.remove(device_index);
        self.drop_if_empty(vlan_index);
        evicted
    }

    pub(crate) fn evict_prefix_through_at(
        &mut self,
        vlan_index: usize,
        device_index: usize,
    ) -> Vec<Device> {
        let vlan = &mut self.vlans[vlan_index];
        let remaining = vlan.devices.split_off(device_index + 1);
        let evicted = std::mem::replace(&mut vlan.devices, remaining);
        self.drop_if_empty(vlan_index);
        evicted
    }

    fn drop_if_empty(&mut self, vlan_index: usize) {
        if self.vlans[vlan_index].is_empty() {
            let vlan = self.vlans.remove(vlan_index);
            log::debug!("VLAN {} has no devices left, removed from inventory", vlan.id);
        }
    }

    fn position(&self, vlan_id: VlanId) -> Option<usize> {
        self.vlans.binary_search_by_key(&vlan_id, |v| v.id).ok()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vlans.is_empty() {
            return write!(f, "(empty inventory)");
        }
        for (i, vlan) in self.vlans.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{vlan}")?;
        }
        Ok(())
    }
}
