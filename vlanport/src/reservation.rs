//! Request and reservation types.
//!
//! A [`Request`] asks for either one primary port or a primary/secondary
//! pair on a single device. Each allocated port becomes one
//! [`ReservationRecord`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::records::OutputRow;
use crate::{DeviceId, VlanId};

/// One of the two independent port slots on a device.
///
/// # Examples
///
/// ```
/// use vlanport::PortKind;
///
/// assert_eq!(PortKind::from_indicator(1), PortKind::Primary);
/// assert_eq!(PortKind::from_indicator(0), PortKind::Secondary);
/// assert_eq!(PortKind::Secondary.as_indicator(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortKind {
    /// The primary port.
    Primary,
    /// The secondary port.
    Secondary,
}

impl PortKind {
    /// Maps a `primary_port` indicator: nonzero is primary, zero secondary.
    #[must_use]
    pub const fn from_indicator(indicator: i64) -> Self {
        if indicator == 0 {
            Self::Secondary
        } else {
            Self::Primary
        }
    }

    /// The `primary_port` column value for this kind.
    #[must_use]
    pub const fn as_indicator(self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 0,
        }
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// An allocation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Opaque id, copied into every record produced for this request.
    pub id: String,
    /// Whether both ports of one device are required.
    pub redundant: bool,
}

impl Request {
    /// Creates a new request.
    #[must_use]
    pub fn new(id: impl Into<String>, redundant: bool) -> Self {
        Self {
            id: id.into(),
            redundant,
        }
    }
}

/// One port reserved for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    request_id: String,
    device_id: DeviceId,
    port: PortKind,
    vlan_id: VlanId,
}

impl ReservationRecord {
    /// Creates a new reservation record.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlanport::{PortKind, ReservationRecord};
    ///
    /// let record = ReservationRecord::new("req1", 3, PortKind::Primary, 1);
    /// assert_eq!(record.to_string(), "req1: device 3 primary port on VLAN 1");
    /// ```
    #[must_use]
    pub fn new(
        request_id: impl Into<String>,
        device_id: DeviceId,
        port: PortKind,
        vlan_id: VlanId,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            device_id,
            port,
            vlan_id,
        }
    }

    /// Returns the request id.
    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the device id.
    #[must_use]
    pub const fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// Returns which port was reserved.
    #[must_use]
    pub const fn port(&self) -> PortKind {
        self.port
    }

    /// Returns the VLAN id.
    #[must_use]
    pub const fn vlan_id(&self) -> VlanId {
        self.vlan_id
    }

    /// Converts the record into its output row.
    #[must_use]
    pub fn to_output_row(&self) -> OutputRow {
        OutputRow {
            request_id: self.request_id.clone(),
            device_id: self.device_id,
            primary_port: self.port.as_indicator(),
            vlan_id: self.vlan_id,
        }
    }
}

impl fmt::Display for ReservationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: device {} {} port on VLAN {}",
            self.request_id, self.device_id, self.port, self.vlan_id
        )
    }
}
