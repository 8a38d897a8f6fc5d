//! Ports layer — hexagonal architecture boundaries.
//!
//! - **Driving port (inbound):** `RoutingTableApi`, the contract a host
//!   depends on.
//! - **Driven port (outbound):** `TimeSource`, the one thing the table
//!   needs from its host (a clock).

pub mod inbound;
pub mod outbound;

pub use inbound::RoutingTableApi;
pub use outbound::{SystemTimeSource, TimeSource};
