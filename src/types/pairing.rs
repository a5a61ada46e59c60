//! Cantor pairing of vertex pairs into single integer keys.

use super::VertexId;

/// Map the ordered pair `(a, b)` to a unique integer.
///
/// Exact while `a + b < 2^32`, which every pair of ids below
/// [`MAX_VERTEX_COUNT`](super::MAX_VERTEX_COUNT) satisfies.
#[inline]
pub fn cantor_pairing(a: VertexId, b: VertexId) -> u64 {
    let s = a as u64 + b as u64;
    debug_assert!(s < (1u64 << 32), "cantor pairing overflow for ({a}, {b})");
    s * (s + 1) / 2 + b as u64
}

/// Cantor pairing of the unordered pair `{a, b}`: the smaller id goes first.
#[inline]
pub fn sorted_cantor_pairing(a: VertexId, b: VertexId) -> u64 {
    if a <= b {
        cantor_pairing(a, b)
    } else {
        cantor_pairing(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_values() {
        assert_eq!(cantor_pairing(0, 0), 0);
        assert_eq!(cantor_pairing(1, 0), 1);
        assert_eq!(cantor_pairing(0, 1), 2);
        assert_eq!(cantor_pairing(2, 0), 3);
        assert_eq!(cantor_pairing(47, 32), 3192);
    }

    #[test]
    fn test_injective_on_normalized_pairs() {
        let mut seen = HashSet::new();
        for u in 0..200u32 {
            for v in u..200u32 {
                assert!(seen.insert(cantor_pairing(u, v)), "collision at ({u}, {v})");
            }
        }
    }

    #[test]
    fn test_sorted_is_symmetric() {
        assert_eq!(sorted_cantor_pairing(7, 3), sorted_cantor_pairing(3, 7));
        assert_eq!(sorted_cantor_pairing(7, 3), cantor_pairing(3, 7));
    }

    #[test]
    fn test_large_ids_fit() {
        let max = i32::MAX as u32 - 1;
        let k = cantor_pairing(max - 1, max);
        assert!(k > cantor_pairing(max - 2, max));
    }
}
