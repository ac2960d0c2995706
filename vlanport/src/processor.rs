//! Sequential request processing against a shared inventory.
//!
//! Requests are served strictly in input order. Each served request turns
//! into one reservation record (non-redundant) or two (redundant, secondary
//! port first). Processing stops at the first request that cannot be
//! served and keeps everything produced up to that point.

use std::fmt;

use crate::allocator::reserve;
use crate::inventory::Inventory;
use crate::records::OutputRow;
use crate::reservation::{PortKind, ReservationRecord, Request};

/// Why processing stopped before the end of the request list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EarlyStop {
    /// The inventory had no VLANs left when this request came up.
    InventoryEmpty {
        /// First request that was not served.
        request_id: String,
        /// Requests left unserved, including this one.
        unserved: usize,
    },
    /// No remaining device could serve this request's mode.
    Exhausted {
        /// First request that was not served.
        request_id: String,
        /// Mode of the request that could not be served.
        redundant: bool,
        /// Requests left unserved, including this one.
        unserved: usize,
    },
}

impl EarlyStop {
    /// Number of requests that were not served.
    #[must_use]
    pub const fn unserved(&self) -> usize {
        match self {
            Self::InventoryEmpty { unserved, .. } | Self::Exhausted { unserved, .. } => *unserved,
        }
    }

    /// Id of the first request that was not served.
    #[must_use]
    pub fn request_id(&self) -> &str {
        match self {
            Self::InventoryEmpty { request_id, .. } | Self::Exhausted { request_id, .. } => {
                request_id
            }
        }
    }
}

impl fmt::Display for EarlyStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InventoryEmpty {
                request_id,
                unserved,
            } => write!(
                f,
                "no more available devices to process requests from request id {request_id} \
                 onwards ({unserved} request(s) not served)"
            ),
            Self::Exhausted {
                request_id,
                redundant,
                unserved,
            } => write!(
                f,
                "no device left for {} request id {request_id} \
                 ({unserved} request(s) not served)",
                if *redundant {
                    "redundant"
                } else {
                    "non-redundant"
                }
            ),
        }
    }
}

/// Result of processing a request list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Every record produced, in emission order.
    pub reservations: Vec<ReservationRecord>,
    /// Number of requests served.
    pub served: usize,
    /// Set when processing ended before the last request.
    pub stopped: Option<EarlyStop>,
}

impl ProcessOutcome {
    /// Returns `true` if no reservation was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Records converted to output rows, in emission order.
    #[must_use]
    pub fn output_rows(&self) -> Vec<OutputRow> {
        self.reservations
            .iter()
            .map(ReservationRecord::to_output_row)
            .collect()
    }
}

/// Serves requests in order against `inventory`, mutating it in place.
///
/// # Examples
///
/// ```
/// use vlanport::{process_requests, Device, Inventory, Request, Vlan};
///
/// let mut inventory = Inventory::new(vec![
///     Vlan::new(1, vec![Device::new(3, true, false)]),
///     Vlan::new(2, vec![Device::new(0, true, true)]),
/// ]);
/// let requests = vec![Request::new("req1", false), Request::new("req2", true)];
///
/// let outcome = process_requests(&mut inventory, &requests);
/// let rows: Vec<_> = outcome
///     .output_rows()
///     .into_iter()
///     .map(|r| (r.request_id, r.device_id, r.primary_port, r.vlan_id))
///     .collect();
/// assert_eq!(
///     rows,
///     vec![
///         ("req1".to_string(), 3, 1, 1),
///         ("req2".to_string(), 0, 0, 2),
///         ("req2".to_string(), 0, 1, 2),
///     ]
/// );
/// assert!(outcome.stopped.is_none());
/// ```
pub fn process_requests(inventory: &mut Inventory, requests: &[Request]) -> ProcessOutcome {
    let mut outcome = ProcessOutcome::default();

    for (index, request) in requests.iter().enumerate() {
        let unserved = requests.len() - index;

        if inventory.is_empty() {
            outcome.stopped = Some(EarlyStop::InventoryEmpty {
                request_id: request.id.clone(),
                unserved,
            });
            break;
        }

        let Some(allocation) = reserve(inventory, request.redundant) else {
            outcome.stopped = Some(EarlyStop::Exhausted {
                request_id: request.id.clone(),
                redundant: request.redundant,
                unserved,
            });
            break;
        };

        if request.redundant {
            outcome.reservations.push(ReservationRecord::new(
                request.id.clone(),
                allocation.device_id,
                PortKind::Secondary,
                allocation.vlan_id,
            ));
        }
        outcome.reservations.push(ReservationRecord::new(
            request.id.clone(),
            allocation.device_id,
            PortKind::Primary,
            allocation.vlan_id,
        ));
        outcome.served += 1;
    }

    if let Some(stop) = &outcome.stopped {
        log::debug!("stopped after {} request(s): {stop}", outcome.served);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Device, Vlan};

    fn sample_inventory() -> Inventory {
        Inventory::new(vec![
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
        ])
    }

    #[test]
    fn test_end_to_end_sample() {
        let mut inventory = sample_inventory();
        let requests = vec![Request::new("req1", false), Request::new("req2", true)];
        let outcome = process_requests(&mut inventory, &requests);

        assert_eq!(
            outcome.reservations,
            vec![
                ReservationRecord::new("req1", 3, PortKind::Primary, 1),
                ReservationRecord::new("req2", 0, PortKind::Secondary, 2),
                ReservationRecord::new("req2", 0, PortKind::Primary, 2),
            ]
        );
        assert_eq!(outcome.served, 2);
        assert!(outcome.stopped.is_none());
    }

    #[test]
    fn test_empty_inventory_stops_before_first_request() {
        let mut inventory = Inventory::default();
        let requests = vec![Request::new("a", false), Request::new("b", true)];
        let outcome = process_requests(&mut inventory, &requests);

        assert!(outcome.is_empty());
        assert_eq!(outcome.served, 0);
        assert_eq!(
            outcome.stopped,
            Some(EarlyStop::InventoryEmpty {
                request_id: "a".to_string(),
                unserved: 2,
            })
        );
    }

    #[test]
    fn test_inventory_drained_mid_list() {
        let mut inventory = Inventory::new(vec![Vlan::new(1, vec![Device::new(0, true, true)])]);
        let requests = vec![
            Request::new("a", true),
            Request::new("b", false),
            Request::new("c", false),
        ];
        let outcome = process_requests(&mut inventory, &requests);

        assert_eq!(outcome.reservations.len(), 2);
        assert_eq!(outcome.served, 1);
        let stop = outcome.stopped.unwrap();
        assert!(matches!(stop, EarlyStop::InventoryEmpty { .. }));
        assert_eq!(stop.request_id(), "b");
        assert_eq!(stop.unserved(), 2);
    }

    #[test]
    fn test_mode_exhaustion_keeps_partial_results() {
        let mut inventory = sample_inventory();
        let requests = vec![
            Request::new("r1", true),
            Request::new("r2", true),
            Request::new("r3", false),
        ];
        let outcome = process_requests(&mut inventory, &requests);

        assert_eq!(outcome.served, 1);
        assert_eq!(
            outcome.stopped,
            Some(EarlyStop::Exhausted {
                request_id: "r2".to_string(),
                redundant: true,
                unserved: 2,
            })
        );
        // A non-redundant request after the stop is not attempted.
        assert!(inventory.vlan(1).is_some());
    }

    #[test]
    fn test_no_requests() {
        let mut inventory = sample_inventory();
        let outcome = process_requests(&mut inventory, &[]);
        assert!(outcome.is_empty());
        assert!(outcome.stopped.is_none());
        assert_eq!(inventory, sample_inventory());
    }

    #[test]
    fn test_serves_every_primary_in_order() {
        let mut inventory = sample_inventory();
        let requests: Vec<_> = (0..6).map(|i| Request::new(format!("n{i}"), false)).collect();
        let outcome = process_requests(&mut inventory, &requests);

        let served: Vec<_> = outcome
            .reservations
            .iter()
            .map(|r| (r.vlan_id(), r.device_id()))
            .collect();
        assert_eq!(served, vec![(1, 3), (2, 0), (5, 0), (8, 0), (8, 2)]);
        assert_eq!(
            outcome.stopped,
            Some(EarlyStop::Exhausted {
                request_id: "n5".to_string(),
                redundant: false,
                unserved: 1,
            })
        );
    }

    #[test]
    fn test_early_stop_display() {
        let stop = EarlyStop::InventoryEmpty {
            request_id: "42".to_string(),
            unserved: 3,
        };
        let message = stop.to_string();
        assert!(message.contains("no more available devices"));
        assert!(message.contains("42"));
        assert!(message.contains('3'));

        let stop = EarlyStop::Exhausted {
            request_id: "7".to_string(),
            redundant: true,
            unserved: 1,
        };
        assert!(stop.to_string().contains("redundant request id 7"));
    }
}
