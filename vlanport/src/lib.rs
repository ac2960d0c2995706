#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vlanport
//!
//! A library for allocating device ports on VLANs.
//!
//! Each VLAN hosts devices with two independent port slots, primary and
//! secondary. Requests are served in order: a non-redundant request takes
//! one primary port, a redundant request takes both ports of one device.
//! Allocation is greedy, lowest VLAN id first and lowest device id within a
//! VLAN, and consumes the inventory as it goes.
//!
//! ## Core Types
//!
//! - [`InventoryBuilder`] and [`Inventory`]: sorted VLAN/device availability
//! - [`allocator::reserve`]: picks and consumes the next eligible device
//! - [`process_requests`]: serves a request list and collects
//!   [`ReservationRecord`]s
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use vlanport::records::AvailabilityRow;
//! use vlanport::{process_requests, InventoryBuilder, Request};
//!
//! let rows = vec![
//!     AvailabilityRow::new("1", "3", "1"),
//!     AvailabilityRow::new("2", "0", "1"),
//!     AvailabilityRow::new("2", "0", "0"),
//! ];
//! let mut inventory = InventoryBuilder::from_rows((1..).zip(rows)).inventory;
//!
//! let requests = vec![Request::new("req1", false), Request::new("req2", true)];
//! let outcome = process_requests(&mut inventory, &requests);
//!
//! assert_eq!(outcome.reservations.len(), 3);
//! assert!(inventory.is_empty());
//! ```

pub mod allocator;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod processor;
pub mod records;
pub mod reservation;

// Re-export key types at crate root for convenience
pub use allocator::{reserve, Allocation};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result, RowError};
pub use inventory::{BuildReport, Device, DeviceId, Inventory, InventoryBuilder, Vlan, VlanId};
pub use logging::{init_logger, LogLevel, Logger};
pub use processor::{process_requests, EarlyStop, ProcessOutcome};
pub use reservation::{PortKind, ReservationRecord, Request};
