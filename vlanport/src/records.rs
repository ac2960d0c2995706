//! Raw row types exchanged with tabular inputs and outputs.
//!
//! Input rows arrive as plain strings so that integer coercion happens here,
//! where a malformed field can be attributed to the row it came from. The
//! CSV plumbing itself lives in the CLI; this module only fixes the shape of
//! the data crossing that boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reservation::{PortKind, Request};
use crate::{DeviceId, VlanId};

/// Column holding the VLAN id.
pub const VLAN_ID_HEADER: &str = "vlan_id";

/// Column holding the device id.
pub const DEVICE_ID_HEADER: &str = "device_id";

/// Column holding the primary-port indicator.
pub const PRIMARY_PORT_HEADER: &str = "primary_port";

/// Column holding the opaque request id.
pub const REQUEST_ID_HEADER: &str = "request_id";

/// Column holding the redundancy flag of a request.
pub const REDUNDANCY_HEADER: &str = "redundant";

/// Columns of the reservation output, in order.
pub const OUTPUT_HEADER: [&str; 4] = [
    REQUEST_ID_HEADER,
    DEVICE_ID_HEADER,
    PRIMARY_PORT_HEADER,
    VLAN_ID_HEADER,
];

/// An input row that cannot be used.
///
/// Raised for fields that are not integers and, by readers, for rows that
/// cannot be decoded at all (wrong field count, invalid UTF-8). `row` is
/// whatever position the caller attaches to the record; the CLI uses the
/// 1-based line number in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: rejected {field} '{value}': {reason}")]
pub struct RowError {
    /// Position of the offending row.
    pub row: u64,
    /// Column name of the offending field, or `record` for the whole row.
    pub field: String,
    /// The raw value as read.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

/// One availability declaration: a single port kind on one device.
///
/// A device with both ports available needs two rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRow {
    /// VLAN id, as read.
    pub vlan_id: String,
    /// Device id, as read.
    pub device_id: String,
    /// Nonzero means the primary port is available, zero the secondary.
    pub primary_port: String,
}

/// A coerced availability row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortAvailability {
    /// VLAN hosting the device.
    pub vlan_id: VlanId,
    /// Device exposing the port.
    pub device_id: DeviceId,
    /// Which of the two ports is available.
    pub port: PortKind,
}

impl AvailabilityRow {
    /// Columns an availability file must provide.
    pub const COLUMNS: [&'static str; 3] = [VLAN_ID_HEADER, DEVICE_ID_HEADER, PRIMARY_PORT_HEADER];

    /// Creates a row from its three raw fields.
    #[must_use]
    pub fn new(
        vlan_id: impl Into<String>,
        device_id: impl Into<String>,
        primary_port: impl Into<String>,
    ) -> Self {
        Self {
            vlan_id: vlan_id.into(),
            device_id: device_id.into(),
            primary_port: primary_port.into(),
        }
    }

    /// Coerces every field to an integer.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`] naming the first field that is not an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlanport::records::AvailabilityRow;
    /// use vlanport::PortKind;
    ///
    /// let parsed = AvailabilityRow::new("8", "2", "1").parse(2).unwrap();
    /// assert_eq!(parsed.vlan_id, 8);
    /// assert_eq!(parsed.device_id, 2);
    /// assert_eq!(parsed.port, PortKind::Primary);
    ///
    /// assert!(AvailabilityRow::new("x", "2", "1").parse(3).is_err());
    /// ```
    pub fn parse(&self, row: u64) -> Result<PortAvailability, RowError> {
        let vlan_id = parse_integer(row, VLAN_ID_HEADER, &self.vlan_id)?;
        let indicator = parse_integer(row, PRIMARY_PORT_HEADER, &self.primary_port)?;
        let device_id = parse_integer(row, DEVICE_ID_HEADER, &self.device_id)?;

        Ok(PortAvailability {
            vlan_id,
            device_id,
            port: PortKind::from_indicator(indicator),
        })
    }
}

/// One allocation request, as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRow {
    /// Opaque request id, preserved verbatim into the output.
    pub request_id: String,
    /// Nonzero means the request needs both ports of one device.
    pub redundant: String,
}

impl RequestRow {
    /// Columns a requests file must provide.
    pub const COLUMNS: [&'static str; 2] = [REQUEST_ID_HEADER, REDUNDANCY_HEADER];

    /// Creates a row from its two raw fields.
    #[must_use]
    pub fn new(request_id: impl Into<String>, redundant: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            redundant: redundant.into(),
        }
    }

    /// Coerces the redundancy flag.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`] if `redundant` is not an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlanport::records::RequestRow;
    ///
    /// let request = RequestRow::new("req-7", "1").parse(2).unwrap();
    /// assert_eq!(request.id, "req-7");
    /// assert!(request.redundant);
    /// ```
    pub fn parse(&self, row: u64) -> Result<Request, RowError> {
        let redundant = parse_integer(row, REDUNDANCY_HEADER, &self.redundant)?;
        Ok(Request::new(self.request_id.clone(), redundant != 0))
    }
}

/// One output row, serialized in [`OUTPUT_HEADER`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    /// Request the port was reserved for.
    pub request_id: String,
    /// Device hosting the port.
    pub device_id: DeviceId,
    /// `1` for the primary port, `0` for the secondary.
    pub primary_port: u8,
    /// VLAN hosting the device.
    pub vlan_id: VlanId,
}

fn parse_integer(row: u64, field: &str, value: &str) -> Result<i64, RowError> {
    value.trim().parse::<i64>().map_err(|e| RowError {
        row,
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("not an integer ({e})"),
    })
}
