//! Index structures supporting the graph algorithms.

pub mod linked_index;
pub mod sorted_set;

pub use linked_index::LinkedIndex;
pub use sorted_set::{are_intersecting, contains, is_strictly_ascending};
