//! Connected component labeling.

use serde::Serialize;

use crate::index::LinkedIndex;
use crate::types::VertexId;

use super::IntAdjacencyGraph;

/// Component id of every vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentLabeling {
    /// Number of distinct components.
    pub component_count: usize,
    /// `component_index[v]` is the component of vertex `v`, in discovery order.
    pub component_index: Vec<u32>,
}

impl ComponentLabeling {
    /// Number of vertices in each component.
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.component_count];
        for &c in &self.component_index {
            sizes[c as usize] += 1;
        }
        sizes
    }

    /// Vertices of component `c`, ascending.
    pub fn members(&self, c: u32) -> Vec<VertexId> {
        self.component_index
            .iter()
            .enumerate()
            .filter(|&(_, &ci)| ci == c)
            .map(|(v, _)| v as VertexId)
            .collect()
    }
}

/// Label the connected components of `graph`.
///
/// Iterative depth-first traversal; unvisited vertices live in a
/// [`LinkedIndex`] so each new component is seeded in O(1).
pub fn connected_components(graph: &IntAdjacencyGraph) -> ComponentLabeling {
    let vertex_count = graph.vertex_count();

    if vertex_count == 0 {
        return ComponentLabeling {
            component_count: 0,
            component_index: Vec::new(),
        };
    }
    if graph.edge_count() == 0 {
        return ComponentLabeling {
            component_count: vertex_count,
            component_index: (0..vertex_count as u32).collect(),
        };
    }

    let mut component_index = vec![u32::MAX; vertex_count];
    let mut current_component = 0u32;
    let mut unvisited = LinkedIndex::new(vertex_count);
    let mut stack: Vec<VertexId> = vec![0];
    component_index[0] = current_component;
    unvisited.remove(0);

    while let Some(v) = stack.pop() {
        let c = component_index[v as usize];
        for &n in graph.neighbors(v) {
            if !unvisited.has(n) {
                continue;
            }
            unvisited.remove(n);
            stack.push(n);
            component_index[n as usize] = c;
        }

        if stack.is_empty() {
            if let Some(seed) = unvisited.head() {
                current_component += 1;
                component_index[seed as usize] = current_component;
                unvisited.remove(seed);
                stack.push(seed);
            }
        }
    }

    let component_count = current_component as usize + 1;
    log::debug!(
        "Labeled {} components over {} vertices",
        component_count,
        vertex_count
    );
    ComponentLabeling {
        component_count,
        component_index,
    }
}
