//! Cross-function checks for the distance/ranking services.

use super::*;
use crate::domain::Id;
use std::net::IpAddr;

fn id(byte: u8) -> Id {
    let mut bytes = [0u8; 20];
    bytes[0] = byte;
    Id::new(bytes)
}

#[test]
fn is_closer_agrees_with_sort_by_distance() {
    use crate::domain::PeerAddress;

    let target = Id::ZERO;
    let a = PeerAddress::new(id(0b0001_0000), IpAddr::from([127, 0, 0, 1]), 1);
    let b = PeerAddress::new(id(0b1000_0000), IpAddr::from([127, 0, 0, 1]), 2);

    let ordering = is_closer(&target, &a.id, &b.id);
    let sorted = sort_by_distance(&[a.clone(), b.clone()], &target);

    assert_eq!(ordering, std::cmp::Ordering::Less);
    assert_eq!(sorted[0], a);
}

#[test]
fn class_of_matches_xor_distance_bit_length_minus_one() {
    let a = id(0b0000_0001);
    let b = Id::ZERO;
    let expected = xor_distance(&a, &b).bit_length() as i32 - 1;
    assert_eq!(class_of(&a, &b), expected);
}
