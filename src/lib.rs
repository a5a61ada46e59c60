//! int-adjacency — compact immutable adjacency graphs over integer vertex ids.
//!
//! Graphs are built once from edge endpoint arrays (optionally with named
//! per-edge property columns) and then queried: edge lookup, degrees,
//! connected components, induced subgraphs and bounded-distance
//! connectivity between vertex sets.

pub mod cli;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    are_vertex_sets_connected, connected_components, from_vertex_pairs, induce_by_vertices,
    ComponentLabeling, DegreeStats, EdgeBuilder, IntAdjacencyGraph, UniqueEdgeBuilder,
};
pub use index::LinkedIndex;
pub use types::{
    cantor_pairing, sorted_cantor_pairing, EdgeProps, GraphError, GraphResult, PropertyArray,
    PropertyElement, VertexId, MAX_VERTEX_COUNT,
};
