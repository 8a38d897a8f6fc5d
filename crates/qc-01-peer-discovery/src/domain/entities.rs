//! Core identifiers and endpoint records for the Kademlia routing table.

use std::fmt;
use std::net::IpAddr;

/// A 160-bit unsigned identifier, stored big-endian (`bytes[0]` is the
/// most significant byte).
///
/// Used both as a peer identifier and, generically, as any key the table
/// ranks peers against.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id([u8; 20]);

impl Id {
    /// All bits zero. Never a valid peer id.
    pub const ZERO: Id = Id([0u8; 20]);

    /// All bits one.
    pub const MAX: Id = Id([0xffu8; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// XOR with another id.
    pub fn xor(&self, other: &Id) -> Id {
        let mut out = [0u8; 20];
        for i in 0..20 {
            out[i] = self.0[i] ^ other.0[i];
        }
        Id(out)
    }

    /// Index of the most-significant set bit, plus one. Zero when every
    /// bit is zero.
    pub fn bit_length(&self) -> u32 {
        for (i, byte) in self.0.iter().enumerate() {
            if *byte != 0 {
                let bytes_from_here = (20 - i) as u32;
                return bytes_from_here * 8 - byte.leading_zeros();
            }
        }
        0
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id(0x")?;
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A peer endpoint record. Equality and hashing are by `id` alone — two
/// `PeerAddress` values with the same id are the same peer even if their
/// network address has since changed underneath them.
///
/// Callers must not mutate a `PeerAddress` after handing it to the table;
/// the table treats it as a value to be copied, not a shared mutable cell.
#[derive(Debug, Clone)]
pub struct PeerAddress {
    pub id: Id,
    pub address: IpAddr,
    pub port: u16,
    pub firewalled_tcp: bool,
}

impl PeerAddress {
    pub fn new(id: Id, address: IpAddr, port: u16) -> Self {
        Self {
            id,
            address,
            port,
            firewalled_tcp: false,
        }
    }
}

impl PartialEq for PeerAddress {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PeerAddress {}

impl std::hash::Hash for PeerAddress {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Milliseconds since the UNIX epoch. Held as a plain newtype so the
/// routing table never calls `SystemTime::now()` directly — see
/// `ports::TimeSource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn new(millis: u64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn add_millis(&self, millis: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(millis))
    }

    pub fn add_secs(&self, secs: u64) -> Timestamp {
        self.add_millis(secs.saturating_mul(1000))
    }

    pub fn saturating_sub(&self, other: Timestamp) -> u64 {
        self.0.saturating_sub(other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_length_of_zero_is_zero() {
        assert_eq!(Id::ZERO.bit_length(), 0);
    }

    #[test]
    fn bit_length_scenario_from_spec() {
        let mut self_bytes = [0u8; 20];
        self_bytes[19] = 0x01;
        let mut other_bytes = [0u8; 20];
        other_bytes[19] = 0x03;

        let me = Id::new(self_bytes);
        let other = Id::new(other_bytes);
        let xor = me.xor(&other);
        assert_eq!(xor.bit_length(), 2);
    }

    #[test]
    fn xor_of_id_with_itself_is_zero() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xaa;
        let id = Id::new(bytes);
        assert_eq!(id.xor(&id), Id::ZERO);
        assert_eq!(id.xor(&id).bit_length(), 0);
    }

    #[test]
    fn bit_length_of_max_is_160() {
        assert_eq!(Id::MAX.bit_length(), 160);
    }

    #[test]
    fn ordering_is_unsigned_big_endian() {
        let mut low = [0u8; 20];
        low[19] = 1;
        let mut high = [0u8; 20];
        high[0] = 1;
        assert!(Id::new(low) < Id::new(high));
    }

    #[test]
    fn peer_address_equality_ignores_address_and_port() {
        let id = Id::new([7u8; 20]);
        let a = PeerAddress::new(id, IpAddr::from([127, 0, 0, 1]), 30303);
        let b = PeerAddress::new(id, IpAddr::from([10, 0, 0, 1]), 40404);
        assert_eq!(a, b);
    }

    #[test]
    fn timestamp_add_secs_converts_to_millis() {
        let t = Timestamp::new(1_000);
        assert_eq!(t.add_secs(2).as_millis(), 3_000);
    }
}
