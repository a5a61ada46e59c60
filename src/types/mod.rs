//! Core value types shared by the graph, builders and algorithms.

pub mod error;
pub mod pairing;
pub mod property;

pub use error::{GraphError, GraphResult};
pub use pairing::{cantor_pairing, sorted_cantor_pairing};
pub use property::{EdgeProps, PropertyArray, PropertyElement};

/// Vertex identifier. Vertices of a graph are always `0..vertex_count`.
pub type VertexId = u32;

/// Largest vertex count accepted by the builders.
///
/// Keeps every normalized vertex pair inside the exact range of the
/// `u64` Cantor pairing used for edge deduplication.
pub const MAX_VERTEX_COUNT: usize = i32::MAX as usize;

/// Check that `vertex_count` is within [`MAX_VERTEX_COUNT`].
pub(crate) fn check_vertex_count(vertex_count: usize) -> GraphResult<()> {
    if vertex_count > MAX_VERTEX_COUNT {
        return Err(GraphError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTEX_COUNT,
        });
    }
    Ok(())
}

/// Check that `vertex` is a valid id in a graph of `vertex_count` vertices.
#[inline]
pub(crate) fn check_vertex(vertex: VertexId, vertex_count: usize) -> GraphResult<()> {
    if (vertex as usize) >= vertex_count {
        return Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        });
    }
    Ok(())
}
