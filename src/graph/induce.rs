//! Vertex-induced subgraphs.

use crate::types::{check_vertex, EdgeProps, GraphError, GraphResult, VertexId};

use super::IntAdjacencyGraph;

/// Project `graph` onto `vertex_indices`.
///
/// Vertex `k` of the result is `vertex_indices[k]` of the input. Edges with
/// an endpoint outside the subset are dropped; edge properties are gathered
/// from the surviving slots.
pub fn induce_by_vertices(
    graph: &IntAdjacencyGraph,
    vertex_indices: &[VertexId],
) -> GraphResult<IntAdjacencyGraph> {
    let vertex_count = graph.vertex_count();

    // old id -> new id + 1, 0 = excluded
    let mut vertex_map = vec![0u32; vertex_count];
    for (k, &v) in vertex_indices.iter().enumerate() {
        check_vertex(v, vertex_count)?;
        if vertex_map[v as usize] != 0 {
            return Err(GraphError::DuplicateVertex(v));
        }
        vertex_map[v as usize] = k as u32 + 1;
    }

    let b = graph.b();
    let mut slot_count = 0;
    for &v in vertex_indices {
        slot_count += graph
            .neighbors(v)
            .iter()
            .filter(|&&n| vertex_map[n as usize] != 0)
            .count();
    }

    let mut new_offsets = Vec::with_capacity(vertex_indices.len() + 1);
    let mut slot_indices = Vec::with_capacity(slot_count);
    let mut new_a = Vec::with_capacity(slot_count);
    let mut new_b = Vec::with_capacity(slot_count);
    new_offsets.push(0);
    for (k, &v) in vertex_indices.iter().enumerate() {
        for t in graph.slots(v) {
            let mapped = vertex_map[b[t] as usize];
            if mapped == 0 {
                continue;
            }
            new_a.push(k as VertexId);
            new_b.push(mapped - 1);
            slot_indices.push(t);
        }
        new_offsets.push(new_a.len());
    }

    let edge_props: EdgeProps = graph
        .edge_props()
        .iter()
        .map(|(name, prop)| (name.clone(), prop.pick_indices(&slot_indices)))
        .collect();

    let edge_count = slot_count / 2;
    log::debug!(
        "Induced subgraph: {} of {} vertices, {} of {} edges",
        vertex_indices.len(),
        vertex_count,
        edge_count,
        graph.edge_count()
    );
    IntAdjacencyGraph::from_parts(new_offsets, new_a, new_b, edge_count, edge_props)
}
