//! XOR distance and bucket-class arithmetic.

use crate::domain::Id;

/// `d(a, b) = a ⊕ b`, interpreted as a 160-bit unsigned integer. Smaller
/// values mean `a` and `b` are closer in the Kademlia metric.
pub fn xor_distance(a: &Id, b: &Id) -> Id {
    a.xor(b)
}

/// `classOf(self, other) = bitLength(self ⊕ other) − 1`, in `0..159`.
///
/// `self ⊕ self == Id::ZERO`, whose `bit_length()` is zero, so
/// `class_of(self, self) == -1` — a sentinel meaning "not a valid
/// bucket", used to reject the local id before it ever reaches a
/// bucket.
pub fn class_of(reference: &Id, other: &Id) -> i32 {
    xor_distance(reference, other).bit_length() as i32 - 1
}

/// Three-way comparison of `a` and `b`'s XOR distance to `id`, per
/// `RoutingTable::isCloser`.
pub fn is_closer(id: &Id, a: &Id, b: &Id) -> std::cmp::Ordering {
    xor_distance(id, a).cmp(&xor_distance(id, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_of_self_is_sentinel_minus_one() {
        let id = Id::new([0x42u8; 20]);
        assert_eq!(class_of(&id, &id), -1);
    }

    #[test]
    fn class_of_is_symmetric() {
        let a = Id::new([0x11u8; 20]);
        let b = Id::new([0x22u8; 20]);
        assert_eq!(class_of(&a, &b), class_of(&b, &a));
    }

    #[test]
    fn class_of_scenario_from_spec() {
        let mut a = [0u8; 20];
        a[19] = 0x01;
        let mut b = [0u8; 20];
        b[19] = 0x03;
        assert_eq!(class_of(&Id::new(a), &Id::new(b)), 1);
    }

    #[test]
    fn is_closer_orders_by_xor_magnitude() {
        let target = Id::ZERO;
        let mut near = [0u8; 20];
        near[19] = 0x01;
        let mut far = [0u8; 20];
        far[0] = 0x01;

        assert_eq!(
            is_closer(&target, &Id::new(near), &Id::new(far)),
            std::cmp::Ordering::Less
        );
    }
}
