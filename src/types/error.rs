//! Error types for the int-adjacency library.

use thiserror::Error;

/// All errors that can occur while building or querying adjacency graphs.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Edge endpoint arrays have different lengths.
    #[error("Endpoint arrays differ in length: xs has {xs}, ys has {ys}")]
    EndpointLengthMismatch { xs: usize, ys: usize },

    /// A vertex id is not in `0..vertex_count`.
    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: u32, vertex_count: usize },

    /// Vertex count exceeds the supported maximum.
    #[error("Too many vertices: {count} > {max}")]
    TooManyVertices { count: usize, max: usize },

    /// An edge property array is not indexed like the slot arrays.
    #[error("Edge property '{name}' has length {got}, expected {expected}")]
    PropertyLengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// `assign_property` was called before any edge was committed.
    #[error("No edge has been committed yet")]
    NoCurrentEdge,

    /// `add_next_edge` was called after the last edge.
    #[error("All {0} edges have already been committed")]
    BuilderExhausted(usize),

    /// `create_graph` was called before every edge was committed.
    #[error("Only {committed} of {expected} edges committed")]
    IncompleteBuild { committed: usize, expected: usize },

    /// A vertex set argument is not strictly ascending.
    #[error("Vertex set is not strictly ascending")]
    UnsortedVertexSet,

    /// A vertex subset lists the same vertex twice.
    #[error("Vertex {0} listed more than once")]
    DuplicateVertex(u32),

    /// Raw CSR arrays violate the adjacency invariants.
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Edge list text could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
