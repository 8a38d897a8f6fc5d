//! Peer ranking by XOR distance.

use super::distance::xor_distance;
use crate::domain::{Id, PeerAddress};

/// Sort peers by XOR distance from `target`, ascending (closest first).
/// Used to build the result of `closePeers`.
pub fn sort_by_distance(peers: &[PeerAddress], target: &Id) -> Vec<PeerAddress> {
    let mut sorted = peers.to_vec();
    sorted.sort_by(|a, b| xor_distance(&a.id, target).cmp(&xor_distance(&b.id, target)));
    sorted
}

/// The `at_least` closest peers to `target` from `peers`, ascending by
/// distance. Returns fewer than `at_least` without error if that many
/// aren't available.
pub fn closest(peers: &[PeerAddress], target: &Id, at_least: usize) -> Vec<PeerAddress> {
    sort_by_distance(peers, target)
        .into_iter()
        .take(at_least)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    fn peer(byte: u8) -> PeerAddress {
        let mut bytes = [0u8; 20];
        bytes[0] = byte;
        PeerAddress::new(Id::new(bytes), IpAddr::from([127, 0, 0, 1]), 30303)
    }

    #[test]
    fn sort_by_distance_is_ascending() {
        let target = Id::ZERO;
        let peers = vec![peer(0b1000_0000), peer(0b0100_0000), peer(0b0010_0000)];
        let sorted = sort_by_distance(&peers, &target);
        // smallest XOR magnitude (closest) first
        assert_eq!(sorted[0], peer(0b0010_0000));
        assert_eq!(sorted[2], peer(0b1000_0000));
    }

    #[test]
    fn closest_returns_fewer_than_requested_without_error() {
        let target = Id::ZERO;
        let peers = vec![peer(1), peer(2)];
        let result = closest(&peers, &target, 5);
        assert_eq!(result.len(), 2);
    }
}
