//! Aggregation of availability rows into a sorted [`Inventory`].
//!
//! Rows are OR-ed into a two-level map keyed by VLAN id then device id, so
//! the order in which they arrive has no effect. Sorting happens once, when
//! the map is materialized, and is what fixes allocation priority.

use std::collections::HashMap;

use super::{Device, DeviceId, Inventory, Vlan, VlanId};
use crate::records::{AvailabilityRow, RowError};
use crate::reservation::PortKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Ports {
    primary: bool,
    secondary: bool,
}

impl Ports {
    const fn any(self) -> bool {
        self.primary || self.secondary
    }
}

/// Outcome of building an inventory from raw rows.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// The sorted inventory.
    pub inventory: Inventory,
    /// Rows that were dropped because a field was not an integer.
    pub skipped: Vec<RowError>,
    /// Number of rows that contributed to the inventory.
    pub rows_accepted: usize,
}

/// Accumulates port availability and materializes an [`Inventory`].
///
/// # Examples
///
/// ```
/// use vlanport::{InventoryBuilder, PortKind};
///
/// let mut builder = InventoryBuilder::new();
/// builder
///     .add(2, 0, PortKind::Primary)
///     .add(1, 3, PortKind::Primary)
///     .add(2, 0, PortKind::Secondary);
///
/// let inventory = builder.build();
/// assert_eq!(inventory.vlans()[0].id(), 1);
/// assert!(inventory.vlan(2).unwrap().devices()[0].is_redundant());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InventoryBuilder {
    vlans: HashMap<VlanId, HashMap<DeviceId, Ports>>,
    rows_accepted: usize,
}

impl InventoryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one port of one device as available.
    pub fn add(&mut self, vlan_id: VlanId, device_id: DeviceId, port: PortKind) -> &mut Self {
        let ports = self.entry(vlan_id, device_id);
        match port {
            PortKind::Primary => ports.primary = true,
            PortKind::Secondary => ports.secondary = true,
        }
        self
    }

    /// Coerces and adds one raw row.
    ///
    /// On error the aggregate is left untouched, so the caller can skip the
    /// row and carry on with the next one.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`] if any field of the row is not an integer.
    pub fn add_row(&mut self, row: &AvailabilityRow, position: u64) -> Result<(), RowError> {
        let parsed = row.parse(position)?;
        log::trace!(
            "row {position}: VLAN {} device {} {} port available",
            parsed.vlan_id,
            parsed.device_id,
            parsed.port
        );
        self.add(parsed.vlan_id, parsed.device_id, parsed.port);
        self.rows_accepted += 1;
        Ok(())
    }

    /// Builds an inventory from numbered rows, skipping malformed ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlanport::records::AvailabilityRow;
    /// use vlanport::InventoryBuilder;
    ///
    /// let rows = vec![
    ///     AvailabilityRow::new("1", "3", "1"),
    ///     AvailabilityRow::new("one", "3", "1"),
    /// ];
    /// let report = InventoryBuilder::from_rows((1..).zip(rows));
    /// assert_eq!(report.rows_accepted, 1);
    /// assert_eq!(report.skipped.len(), 1);
    /// assert_eq!(report.inventory.device_count(), 1);
    /// ```
    pub fn from_rows<I>(rows: I) -> BuildReport
    where
        I: IntoIterator<Item = (u64, AvailabilityRow)>,
    {
        let mut builder = Self::new();
        let skipped = builder.extend_rows(rows);
        let rows_accepted = builder.rows_accepted;
        BuildReport {
            inventory: builder.build(),
            skipped,
            rows_accepted,
        }
    }

    /// Adds numbered rows, returning the ones that were skipped.
    pub fn extend_rows<I>(&mut self, rows: I) -> Vec<RowError>
    where
        I: IntoIterator<Item = (u64, AvailabilityRow)>,
    {
        rows.into_iter()
            .filter_map(|(position, row)| {
                self.add_row(&row, position)
                    .map_err(|err| {
                        log::warn!("skipping availability {err}");
                        err
                    })
                    .err()
            })
            .collect()
    }

    /// Number of rows accepted through [`InventoryBuilder::add_row`].
    #[must_use]
    pub const fn rows_accepted(&self) -> usize {
        self.rows_accepted
    }

    /// Returns `true` if nothing has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vlans.is_empty()
    }

    /// Materializes the sorted inventory.
    #[must_use]
    pub fn build(self) -> Inventory {
        let mut vlans: Vec<Vlan> = self
            .vlans
            .into_iter()
            .map(|(vlan_id, devices)| {
                let mut devices: Vec<Device> = devices
                    .into_iter()
                    .filter(|(_, ports)| ports.any())
                    .map(|(device_id, ports)| Device::new(device_id, ports.primary, ports.secondary))
                    .collect();
                devices.sort_by_key(|d| d.id);
                Vlan {
                    id: vlan_id,
                    devices,
                }
            })
            .filter(|vlan| !vlan.is_empty())
            .collect();
        vlans.sort_by_key(|v| v.id);

        Inventory { vlans }
    }

    pub(super) fn add_device(&mut self, vlan_id: VlanId, device: Device) {
        let ports = self.entry(vlan_id, device.id);
        ports.primary |= device.has_primary;
        ports.secondary |= device.has_secondary;
    }

    fn entry(&mut self, vlan_id: VlanId, device_id: DeviceId) -> &mut Ports {
        self.vlans
            .entry(vlan_id)
            .or_default()
            .entry(device_id)
            .or_default()
    }
}
