//! `RoutingTableService` — a time-aware convenience wrapper around the
//! pure, `now`-explicit `RoutingTable`.
//!
//! Submodules group the methods the way the domain type groups them:
//! construction and reads in `core`, the two mutating operations in
//! `api`, listener management in `events`, periodic liveness checks in
//! `maintenance`.

mod api;
mod core;
mod events;
mod maintenance;

pub use core::RoutingTableService;
