//! Integer adjacency graphs — structure, builders and algorithms.

pub mod builder;
pub mod components;
pub mod induce;
pub mod int_graph;
pub mod traversal;

pub use builder::{from_vertex_pairs, EdgeBuilder, UniqueEdgeBuilder};
pub use components::{connected_components, ComponentLabeling};
pub use induce::induce_by_vertices;
pub use int_graph::{DegreeStats, IntAdjacencyGraph};
pub use traversal::are_vertex_sets_connected;
