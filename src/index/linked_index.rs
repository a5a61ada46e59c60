//! Array-backed doubly linked list over `0..n` with O(1) removal.

use crate::types::VertexId;

/// Sentinel for "no element".
pub const NIL: VertexId = VertexId::MAX;

/// The set `{0, .., n-1}` as a doubly linked list stored in two arrays.
///
/// Removal and access to an arbitrary remaining member (the head) are O(1).
pub struct LinkedIndex {
    prev: Vec<VertexId>,
    next: Vec<VertexId>,
    head: VertexId,
    len: usize,
}

impl LinkedIndex {
    /// Create a list containing every element of `0..n`.
    pub fn new(n: usize) -> Self {
        debug_assert!(n < NIL as usize);
        let mut prev = Vec::with_capacity(n);
        let mut next = Vec::with_capacity(n);
        for i in 0..n as VertexId {
            prev.push(if i == 0 { NIL } else { i - 1 });
            next.push(if i as usize + 1 == n { NIL } else { i + 1 });
        }
        Self {
            prev,
            next,
            head: if n > 0 { 0 } else { NIL },
            len: n,
        }
    }

    /// First remaining element, or `None` once the list is empty.
    #[inline]
    pub fn head(&self) -> Option<VertexId> {
        (self.head != NIL).then_some(self.head)
    }

    /// Whether `i` is still in the list.
    #[inline]
    pub fn has(&self, i: VertexId) -> bool {
        let k = i as usize;
        self.prev[k] != NIL || self.next[k] != NIL || self.head == i
    }

    /// Remove `i` from the list. No-op if it was already removed.
    pub fn remove(&mut self, i: VertexId) {
        if !self.has(i) {
            return;
        }
        let k = i as usize;
        let (p, n) = (self.prev[k], self.next[k]);
        if p != NIL {
            self.next[p as usize] = n;
        }
        if n != NIL {
            self.prev[n as usize] = p;
        }
        if self.head == i {
            self.head = n;
        }
        self.prev[k] = NIL;
        self.next[k] = NIL;
        self.len -= 1;
    }

    /// Number of remaining elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contains_all() {
        let list = LinkedIndex::new(4);
        assert_eq!(list.len(), 4);
        assert_eq!(list.head(), Some(0));
        assert!((0..4).all(|i| list.has(i)));
    }

    #[test]
    fn test_remove_head_advances() {
        let mut list = LinkedIndex::new(3);
        list.remove(0);
        assert_eq!(list.head(), Some(1));
        assert!(!list.has(0));
        list.remove(1);
        assert_eq!(list.head(), Some(2));
        list.remove(2);
        assert_eq!(list.head(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_middle_and_tail() {
        let mut list = LinkedIndex::new(5);
        list.remove(2);
        list.remove(4);
        assert!(!list.has(2));
        assert!(!list.has(4));
        assert!(list.has(3));
        list.remove(0);
        list.remove(1);
        assert_eq!(list.head(), Some(3));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_double_remove_is_noop() {
        let mut list = LinkedIndex::new(2);
        list.remove(1);
        list.remove(1);
        assert_eq!(list.len(), 1);
        assert!(list.has(0));
    }

    #[test]
    fn test_single_element() {
        let mut list = LinkedIndex::new(1);
        assert!(list.has(0));
        list.remove(0);
        assert!(!list.has(0));
        assert_eq!(list.head(), None);
    }

    #[test]
    fn test_empty() {
        let list = LinkedIndex::new(0);
        assert_eq!(list.head(), None);
        assert!(list.is_empty());
    }
}
