//! Domain layer — pure Kademlia routing-table logic, no I/O.
//!
//! - `Id` / XOR distance and bucket-class arithmetic
//! - the bucketed routing table itself, with its offline log, oversize
//!   index, maintenance queue and listener set
//! - peer ranking (`closePeers`, `isCloser`)

pub mod entities;
pub mod errors;
pub mod routing_table;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use routing_table::*;
pub use services::*;
pub use value_objects::*;
