//! Builders turning edge lists into [`IntAdjacencyGraph`] instances.

use std::collections::HashSet;

use crate::types::{
    cantor_pairing, check_vertex, check_vertex_count, EdgeProps, GraphError, GraphResult,
    PropertyElement, VertexId,
};

use super::IntAdjacencyGraph;

/// Bulk builder: bucket-sorts an edge list into CSR slots in O(V + E).
///
/// Edges are committed in input order. To attach properties, alternate
/// [`add_next_edge`](Self::add_next_edge) and
/// [`assign_property`](Self::assign_property):
///
/// ```
/// use int_adjacency::graph::EdgeBuilder;
/// use int_adjacency::types::EdgeProps;
///
/// let order = [1i8, 2];
/// let mut builder = EdgeBuilder::new(3, vec![0, 1], vec![1, 2]).unwrap();
/// let mut prop = builder.new_property::<i8>();
/// for &o in &order {
///     builder.add_next_edge().unwrap();
///     builder.assign_property(&mut prop, o).unwrap();
/// }
/// let mut props = EdgeProps::new();
/// props.insert("order".into(), prop.into());
/// let graph = builder.create_graph(props).unwrap();
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct EdgeBuilder {
    vertex_count: usize,
    xs: Vec<VertexId>,
    ys: Vec<VertexId>,
    offsets: Vec<usize>,
    bucket_fill: Vec<usize>,
    a: Vec<VertexId>,
    b: Vec<VertexId>,
    current: usize,
    /// Slots written by the most recent `add_next_edge`.
    last_slots: Option<(usize, usize)>,
}

impl EdgeBuilder {
    /// Prepare a builder for the edges `(xs[k], ys[k])`.
    ///
    /// Counts degrees and computes slot offsets eagerly.
    pub fn new(vertex_count: usize, xs: Vec<VertexId>, ys: Vec<VertexId>) -> GraphResult<Self> {
        check_vertex_count(vertex_count)?;
        if xs.len() != ys.len() {
            return Err(GraphError::EndpointLengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        let mut bucket_sizes = vec![0usize; vertex_count];
        for &v in xs.iter().chain(ys.iter()) {
            check_vertex(v, vertex_count)?;
            bucket_sizes[v as usize] += 1;
        }

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut offset = 0;
        for size in &bucket_sizes {
            offsets.push(offset);
            offset += size;
        }
        offsets.push(offset);

        Ok(Self {
            vertex_count,
            xs,
            ys,
            offsets,
            bucket_fill: vec![0; vertex_count],
            a: vec![0; offset],
            b: vec![0; offset],
            current: 0,
            last_slots: None,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges the builder will commit.
    pub fn edge_count(&self) -> usize {
        self.xs.len()
    }

    /// Size of the `a`/`b` arrays and of every property column.
    pub fn slot_count(&self) -> usize {
        self.a.len()
    }

    /// A zeroed property column sized for this builder.
    pub fn new_property<T: PropertyElement>(&self) -> Vec<T> {
        vec![T::default(); self.slot_count()]
    }

    /// Commit the next edge into both endpoints' next free slots.
    pub fn add_next_edge(&mut self) -> GraphResult<()> {
        if self.current >= self.xs.len() {
            return Err(GraphError::BuilderExhausted(self.xs.len()));
        }
        let (x, y) = (self.xs[self.current], self.ys[self.current]);

        let ox = self.offsets[x as usize] + self.bucket_fill[x as usize];
        self.a[ox] = x;
        self.b[ox] = y;
        self.bucket_fill[x as usize] += 1;

        let oy = self.offsets[y as usize] + self.bucket_fill[y as usize];
        self.a[oy] = y;
        self.b[oy] = x;
        self.bucket_fill[y as usize] += 1;

        self.current += 1;
        self.last_slots = Some((ox, oy));
        Ok(())
    }

    /// Commit every remaining edge. Use only for property-less graphs.
    pub fn add_all_edges(&mut self) -> GraphResult<()> {
        while self.current < self.xs.len() {
            self.add_next_edge()?;
        }
        Ok(())
    }

    /// Write `value` into both slots of the most recently committed edge.
    pub fn assign_property<T: Copy>(&self, prop: &mut [T], value: T) -> GraphResult<()> {
        let (ox, oy) = self.last_slots.ok_or(GraphError::NoCurrentEdge)?;
        if prop.len() != self.slot_count() {
            return Err(GraphError::PropertyLengthMismatch {
                name: "unnamed".into(),
                expected: self.slot_count(),
                got: prop.len(),
            });
        }
        prop[ox] = value;
        prop[oy] = value;
        Ok(())
    }

    /// Freeze the builder into a graph carrying `edge_props`.
    pub fn create_graph(self, edge_props: EdgeProps) -> GraphResult<IntAdjacencyGraph> {
        if self.current != self.xs.len() {
            return Err(GraphError::IncompleteBuild {
                committed: self.current,
                expected: self.xs.len(),
            });
        }
        let edge_count = self.xs.len();
        let graph =
            IntAdjacencyGraph::from_parts(self.offsets, self.a, self.b, edge_count, edge_props)?;
        log::debug!(
            "Built adjacency graph: {} vertices, {} edges, {} properties",
            graph.vertex_count(),
            graph.edge_count(),
            graph.edge_props().len()
        );
        Ok(graph)
    }
}

/// Build a property-less graph from parallel endpoint arrays.
pub fn from_vertex_pairs(
    vertex_count: usize,
    xs: Vec<VertexId>,
    ys: Vec<VertexId>,
) -> GraphResult<IntAdjacencyGraph> {
    let mut builder = EdgeBuilder::new(vertex_count, xs, ys)?;
    builder.add_all_edges()?;
    builder.create_graph(EdgeProps::new())
}

/// Builder that accepts each undirected edge at most once.
pub struct UniqueEdgeBuilder {
    vertex_count: usize,
    xs: Vec<VertexId>,
    ys: Vec<VertexId>,
    included: HashSet<u64>,
}

impl UniqueEdgeBuilder {
    pub fn new(vertex_count: usize) -> GraphResult<Self> {
        check_vertex_count(vertex_count)?;
        Ok(Self {
            vertex_count,
            xs: Vec::new(),
            ys: Vec::new(),
            included: HashSet::new(),
        })
    }

    /// Add the edge `{i, j}`. Returns `false` if it was already added.
    ///
    /// Self-loops are not filtered.
    pub fn add_edge(&mut self, i: VertexId, j: VertexId) -> GraphResult<bool> {
        check_vertex(i, self.vertex_count)?;
        check_vertex(j, self.vertex_count)?;
        let (u, v) = if i > j { (j, i) } else { (i, j) };
        if !self.included.insert(cantor_pairing(u, v)) {
            return Ok(false);
        }
        self.xs.push(u);
        self.ys.push(v);
        Ok(true)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of accepted edges.
    pub fn edge_count(&self) -> usize {
        self.xs.len()
    }

    /// Build a property-less graph from the accepted edges.
    pub fn get_graph(self) -> GraphResult<IntAdjacencyGraph> {
        from_vertex_pairs(self.vertex_count, self.xs, self.ys)
    }

    /// Hand the accepted edges, in acceptance order, to an [`EdgeBuilder`]
    /// so properties can be assigned.
    pub fn edge_builder(self) -> GraphResult<EdgeBuilder> {
        EdgeBuilder::new(self.vertex_count, self.xs, self.ys)
    }
}
