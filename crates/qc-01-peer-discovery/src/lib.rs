//! # Routing Table
//!
//! A Kademlia-style routing table: the in-memory structure a
//! peer-to-peer node maintains to track a bounded, well-distributed
//! sample of live peers, rank them by XOR distance to a 160-bit key, and
//! drive periodic liveness maintenance.
//!
//! ## Architecture
//!
//! - **Domain layer:** pure routing-table logic — `Id`, buckets, the
//!   offline-log cache, the maintenance queue, the oversize index, the
//!   listener set. No I/O, no clock reads.
//! - **Ports layer:** `TimeSource` (driven) and `RoutingTableApi`
//!   (driving) trait boundaries.
//! - **Service layer:** `RoutingTableService`, a thin wrapper that
//!   sources `now` from an injected `TimeSource` so callers don't thread
//!   a clock through every call site themselves.
//!
//! ## Example
//!
//! ```rust
//! use qc_01_peer_discovery::domain::{Id, PeerAddress, RoutingTable, RoutingTableConfig, Timestamp};
//! use std::net::IpAddr;
//!
//! let self_id = Id::new([0xffu8; 20]);
//! let table = RoutingTable::new(self_id, RoutingTableConfig::default()).unwrap();
//!
//! let peer = PeerAddress::new(Id::new([1u8; 20]), IpAddr::from([127, 0, 0, 1]), 30303);
//! assert!(table.peer_online(peer.clone(), None, Timestamp::new(0)));
//! assert!(table.contains(&peer.id));
//! ```

pub mod domain;
pub mod ports;
pub mod service;
#[cfg(test)]
pub mod test_utils;

pub use domain::{
    Id, OfflineLogEntry, PeerAddress, PeerStat, RoutingTable, RoutingTableConfig,
    RoutingTableError, RoutingTableListener, Timestamp, NUM_BUCKETS,
};

pub use domain::{class_of, closest, is_closer, sort_by_distance, xor_distance};

pub use ports::{RoutingTableApi, SystemTimeSource, TimeSource};

pub use service::RoutingTableService;
