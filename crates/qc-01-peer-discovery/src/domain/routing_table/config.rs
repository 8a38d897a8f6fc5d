//! Routing table constants.

/// One bucket per bit of a 160-bit `Id`.
pub const NUM_BUCKETS: usize = 160;
