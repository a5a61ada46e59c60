//! Helpers for vertex sets stored as strictly ascending slices.

use crate::types::VertexId;

/// Whether `set` is strictly ascending (sorted, no duplicates).
pub fn is_strictly_ascending(set: &[VertexId]) -> bool {
    set.windows(2).all(|w| w[0] < w[1])
}

/// Whether `set` contains `v`. `set` must be strictly ascending.
#[inline]
pub fn contains(set: &[VertexId], v: VertexId) -> bool {
    set.binary_search(&v).is_ok()
}

/// Whether two strictly ascending sets share at least one element.
pub fn are_intersecting(a: &[VertexId], b: &[VertexId]) -> bool {
    let (Some(&a_first), Some(&a_last)) = (a.first(), a.last()) else {
        return false;
    };
    let (Some(&b_first), Some(&b_last)) = (b.first(), b.last()) else {
        return false;
    };
    if a_last < b_first || b_last < a_first {
        return false;
    }

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => return true,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_ascending() {
        assert!(is_strictly_ascending(&[]));
        assert!(is_strictly_ascending(&[3]));
        assert!(is_strictly_ascending(&[0, 2, 9]));
        assert!(!is_strictly_ascending(&[0, 2, 2]));
        assert!(!is_strictly_ascending(&[3, 1]));
    }

    #[test]
    fn test_contains() {
        let set = [1, 4, 7, 10];
        assert!(contains(&set, 7));
        assert!(!contains(&set, 5));
        assert!(!contains(&[], 0));
    }

    #[test]
    fn test_intersecting() {
        assert!(are_intersecting(&[1, 3, 5], &[2, 3]));
        assert!(!are_intersecting(&[1, 3, 5], &[2, 4, 6]));
        assert!(!are_intersecting(&[1, 2], &[5, 6]));
        assert!(!are_intersecting(&[], &[1]));
        assert!(are_intersecting(&[0], &[0]));
    }
}
