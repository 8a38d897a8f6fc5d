//! Error type for the routing table.
//!
//! The routing table never throws into the caller after construction —
//! every operation returns a plain status value (`bool`, `Option`, or a
//! sequence). This enum exists purely for construction-time failure.

use thiserror::Error;

/// Errors that can occur while building a `RoutingTable`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingTableError {
    /// `self` was `Id::ZERO`. The local node id must be non-zero.
    #[error("local node id must not be the zero id")]
    InvalidConfiguration,
}
