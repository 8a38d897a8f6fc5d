//! Test fixtures shared across the crate's test suites: a deterministic
//! `TimeSource` and small builders for `Id`/`PeerAddress`.

use std::net::IpAddr;

use crate::domain::{Id, PeerAddress, Timestamp};
use crate::ports::TimeSource;

/// A time source that returns a fixed timestamp, for deterministic
/// tests where time progression must be controlled explicitly.
#[derive(Debug, Clone)]
pub struct FixedTimeSource {
    millis: u64,
}

impl FixedTimeSource {
    pub fn new(millis: u64) -> Self {
        Self { millis }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.millis)
    }
}

/// An `Id` with `byte` in the most-significant position, the rest zero.
pub fn fixture_id(byte: u8) -> Id {
    let mut bytes = [0u8; 20];
    bytes[0] = byte;
    Id::new(bytes)
}

/// A loopback `PeerAddress` for `fixture_id(byte)` on an arbitrary port.
pub fn fixture_peer(byte: u8) -> PeerAddress {
    PeerAddress::new(fixture_id(byte), IpAddr::from([127, 0, 0, 1]), 30303)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_source_returns_configured_value() {
        let source = FixedTimeSource::new(1_000);
        assert_eq!(source.now().as_millis(), 1_000);
    }

    #[test]
    fn fixture_peer_is_keyed_by_fixture_id() {
        let peer = fixture_peer(7);
        assert_eq!(peer.id, fixture_id(7));
    }
}
