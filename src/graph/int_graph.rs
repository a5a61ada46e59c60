//! Core graph structure — CSR-style adjacency over integer vertex ids.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{EdgeProps, GraphError, GraphResult, PropertyElement, VertexId};

/// Immutable adjacency-list graph over vertices `0..vertex_count`.
///
/// Edges of the i-th vertex occupy the slots `offset[i]..offset[i + 1]` of
/// the `a` (source) and `b` (destination) arrays. Every undirected edge is
/// stored twice, once per direction. Edge properties are indexed the same
/// way as `a` and `b`.
#[derive(Debug, Clone)]
pub struct IntAdjacencyGraph {
    offset: Vec<usize>,
    a: Vec<VertexId>,
    b: Vec<VertexId>,
    vertex_count: usize,
    edge_count: usize,
    edge_props: EdgeProps,
}

/// Degree summary of a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub isolated: usize,
}

impl IntAdjacencyGraph {
    /// Create a graph from raw CSR arrays.
    ///
    /// Validates the offsets, that every slot lies in its source vertex's
    /// range, that destinations are in range, that every directed slot
    /// `u -> v` is matched by a slot `v -> u`, and property lengths.
    pub fn create(
        offset: Vec<usize>,
        a: Vec<VertexId>,
        b: Vec<VertexId>,
        edge_count: usize,
        edge_props: EdgeProps,
    ) -> GraphResult<Self> {
        let Some(&last) = offset.last() else {
            return Err(GraphError::MalformedGraph("offset array is empty".into()));
        };
        if offset[0] != 0 {
            return Err(GraphError::MalformedGraph("offset[0] must be 0".into()));
        }
        if offset.windows(2).any(|w| w[0] > w[1]) {
            return Err(GraphError::MalformedGraph(
                "offsets must be non-decreasing".into(),
            ));
        }
        let slot_count = slot_count_of(edge_count)?;
        if last != slot_count || a.len() != slot_count || b.len() != slot_count {
            return Err(GraphError::MalformedGraph(format!(
                "expected {} slots, offset ends at {}, a has {}, b has {}",
                slot_count,
                last,
                a.len(),
                b.len()
            )));
        }
        let vertex_count = offset.len() - 1;
        for (v, range) in offset.windows(2).enumerate() {
            for t in range[0]..range[1] {
                if a[t] as usize != v {
                    return Err(GraphError::MalformedGraph(format!(
                        "slot {} lies in vertex {}'s range but has source {}",
                        t, v, a[t]
                    )));
                }
                if b[t] as usize >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex: b[t],
                        vertex_count,
                    });
                }
            }
        }
        check_symmetric(&a, &b)?;
        Self::from_parts(offset, a, b, edge_count, edge_props)
    }

    /// Assemble a graph from arrays the caller already knows are consistent.
    /// Only the edge property lengths are checked.
    pub(crate) fn from_parts(
        offset: Vec<usize>,
        a: Vec<VertexId>,
        b: Vec<VertexId>,
        edge_count: usize,
        edge_props: EdgeProps,
    ) -> GraphResult<Self> {
        let slot_count = slot_count_of(edge_count)?;
        for (name, prop) in &edge_props {
            if prop.len() != slot_count {
                return Err(GraphError::PropertyLengthMismatch {
                    name: name.clone(),
                    expected: slot_count,
                    got: prop.len(),
                });
            }
        }
        Ok(Self {
            vertex_count: offset.len() - 1,
            offset,
            a,
            b,
            edge_count,
            edge_props,
        })
    }

    /// An edgeless graph with `vertex_count` vertices.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            offset: vec![0; vertex_count + 1],
            a: Vec::new(),
            b: Vec::new(),
            vertex_count,
            edge_count: 0,
            edge_props: EdgeProps::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of directed slots (`2 * edge_count`).
    pub fn slot_count(&self) -> usize {
        self.a.len()
    }

    /// Per-vertex slot offsets, `vertex_count + 1` entries.
    pub fn offsets(&self) -> &[usize] {
        &self.offset
    }

    /// Source vertex of each slot.
    pub fn a(&self) -> &[VertexId] {
        &self.a
    }

    /// Destination vertex of each slot.
    pub fn b(&self) -> &[VertexId] {
        &self.b
    }

    pub fn edge_props(&self) -> &EdgeProps {
        &self.edge_props
    }

    /// Typed view of a named edge property. `None` if missing or of another type.
    pub fn edge_prop<T: PropertyElement>(&self, name: &str) -> Option<&[T]> {
        self.edge_props.get(name).and_then(|p| p.as_slice::<T>())
    }

    /// Slot range of vertex `i`.
    #[inline]
    pub fn slots(&self, i: VertexId) -> std::ops::Range<usize> {
        let i = i as usize;
        debug_assert!(i < self.vertex_count, "vertex {i} out of range");
        self.offset[i]..self.offset[i + 1]
    }

    /// Neighbors of vertex `i`, in slot order.
    #[inline]
    pub fn neighbors(&self, i: VertexId) -> &[VertexId] {
        &self.b[self.slots(i)]
    }

    /// Undirected edge lookup.
    ///
    /// Returns the slot in the smaller vertex's range pointing at the larger
    /// one, so `edge_index(i, j) == edge_index(j, i)`.
    pub fn edge_index(&self, i: VertexId, j: VertexId) -> Option<usize> {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        self.directed_edge_index(lo, hi)
    }

    /// Slot in vertex `i`'s range whose destination is `j`.
    pub fn directed_edge_index(&self, i: VertexId, j: VertexId) -> Option<usize> {
        let range = self.slots(i);
        let start = range.start;
        self.b[range].iter().position(|&n| n == j).map(|p| start + p)
    }

    /// Degree of vertex `i`.
    #[inline]
    pub fn vertex_edge_count(&self, i: VertexId) -> usize {
        let i = i as usize;
        debug_assert!(i < self.vertex_count, "vertex {i} out of range");
        self.offset[i + 1] - self.offset[i]
    }

    /// Min/max/mean degree and number of isolated vertices.
    pub fn degree_stats(&self) -> DegreeStats {
        let mut min = usize::MAX;
        let mut max = 0;
        let mut isolated = 0;
        for w in self.offset.windows(2) {
            let d = w[1] - w[0];
            min = min.min(d);
            max = max.max(d);
            if d == 0 {
                isolated += 1;
            }
        }
        DegreeStats {
            min: if self.vertex_count == 0 { 0 } else { min },
            max,
            mean: if self.vertex_count == 0 {
                0.0
            } else {
                self.slot_count() as f64 / self.vertex_count as f64
            },
            isolated,
        }
    }
}

fn slot_count_of(edge_count: usize) -> GraphResult<usize> {
    edge_count.checked_mul(2).ok_or_else(|| {
        GraphError::MalformedGraph(format!("edge count {} overflows the slot count", edge_count))
    })
}

/// Every slot `u -> v` must have a partner `v -> u`, with multiplicity.
/// A self-loop is two slots `u -> u`, so their count per vertex is even.
fn check_symmetric(a: &[VertexId], b: &[VertexId]) -> GraphResult<()> {
    let mut balance: HashMap<(VertexId, VertexId), i64> = HashMap::with_capacity(a.len());
    for (&u, &v) in a.iter().zip(b) {
        let (key, delta) = match u.cmp(&v) {
            std::cmp::Ordering::Less => ((u, v), 1),
            std::cmp::Ordering::Greater => ((v, u), -1),
            std::cmp::Ordering::Equal => ((u, u), 1),
        };
        *balance.entry(key).or_insert(0) += delta;
    }
    let unbalanced = |&((u, v), n): &((VertexId, VertexId), i64)| {
        if u == v {
            n % 2 != 0
        } else {
            n != 0
        }
    };
    match balance.into_iter().find(unbalanced) {
        Some(((u, v), _)) => Err(GraphError::MalformedGraph(format!(
            "edge {}-{} is not stored in both directions",
            u, v
        ))),
        None => Ok(()),
    }
}
