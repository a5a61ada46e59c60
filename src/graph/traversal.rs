//! Bounded-distance reachability between vertex sets (multi-source BFS).

use std::collections::HashSet;

use crate::index::{are_intersecting, contains, is_strictly_ascending};
use crate::types::{check_vertex, GraphError, GraphResult, VertexId};

use super::IntAdjacencyGraph;

/// Whether some vertex of `vertices_a` is within `max_distance` hops of some
/// vertex of `vertices_b`.
///
/// Both sets must be strictly ascending. Intersecting sets are connected at
/// any distance, including 0.
pub fn are_vertex_sets_connected(
    graph: &IntAdjacencyGraph,
    vertices_a: &[VertexId],
    vertices_b: &[VertexId],
    max_distance: u32,
) -> GraphResult<bool> {
    check_vertex_set(vertices_a, graph.vertex_count())?;
    check_vertex_set(vertices_b, graph.vertex_count())?;

    if are_intersecting(vertices_a, vertices_b) {
        return Ok(true);
    }
    if max_distance < 1 {
        return Ok(false);
    }

    let mut visited: HashSet<VertexId> = vertices_a.iter().copied().collect();
    let mut frontier: Vec<VertexId> = vertices_a.to_vec();
    let mut next_frontier: Vec<VertexId> = Vec::new();

    for round in 1..=max_distance {
        for &src in &frontier {
            for &other in graph.neighbors(src) {
                if !visited.insert(other) {
                    continue;
                }
                if contains(vertices_b, other) {
                    log::trace!("Vertex sets meet at vertex {} after {} hops", other, round);
                    return Ok(true);
                }
                next_frontier.push(other);
            }
        }
        if next_frontier.is_empty() {
            log::trace!("Frontier exhausted after {} hops", round);
            break;
        }
        std::mem::swap(&mut frontier, &mut next_frontier);
        next_frontier.clear();
    }

    Ok(false)
}

fn check_vertex_set(set: &[VertexId], vertex_count: usize) -> GraphResult<()> {
    if !is_strictly_ascending(set) {
        return Err(GraphError::UnsortedVertexSet);
    }
    // ascending, so only the last element can be out of range
    if let Some(&last) = set.last() {
        check_vertex(last, vertex_count)?;
    }
    Ok(())
}
