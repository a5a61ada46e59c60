//! Plain-text edge list loading.
//!
//! One edge per line: `u v [weight]`. Blank lines and `#` comments are
//! ignored. Repeated pairs and self-loops are skipped with a warning.

use std::path::Path;

use crate::graph::{IntAdjacencyGraph, UniqueEdgeBuilder};
use crate::types::{EdgeProps, GraphError, GraphResult, VertexId};

/// Name of the edge property filled from the optional third column.
pub const WEIGHT_PROPERTY: &str = "weight";

/// Weight assigned to edges whose line has no third column when other lines do.
const DEFAULT_WEIGHT: f32 = 1.0;

struct ParsedEdge {
    u: VertexId,
    v: VertexId,
    weight: Option<f32>,
}

/// Read and parse an edge list file.
pub fn load_edge_list(
    path: &Path,
    vertex_count: Option<usize>,
) -> GraphResult<IntAdjacencyGraph> {
    let text = std::fs::read_to_string(path)?;
    log::debug!("Loading edge list from {}", path.display());
    parse_edge_list(&text, vertex_count)
}

/// Parse edge list text. Without `vertex_count`, the graph spans `0..=max id`.
pub fn parse_edge_list(
    text: &str,
    vertex_count: Option<usize>,
) -> GraphResult<IntAdjacencyGraph> {
    let mut edges = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        edges.push(parse_line(line, i + 1)?);
    }

    let vertex_count = vertex_count.unwrap_or_else(|| {
        edges
            .iter()
            .map(|e| e.u.max(e.v) as usize + 1)
            .max()
            .unwrap_or(0)
    });
    let weighted = edges.iter().any(|e| e.weight.is_some());

    let mut builder = UniqueEdgeBuilder::new(vertex_count)?;
    let mut weights = Vec::new();
    let (mut self_loops, mut duplicates) = (0usize, 0usize);
    for e in &edges {
        if e.u == e.v {
            self_loops += 1;
            continue;
        }
        if builder.add_edge(e.u, e.v)? {
            weights.push(e.weight.unwrap_or(DEFAULT_WEIGHT));
        } else {
            duplicates += 1;
        }
    }
    if self_loops > 0 {
        log::warn!("Skipped {} self-loop lines", self_loops);
    }
    if duplicates > 0 {
        log::warn!("Skipped {} duplicate edge lines", duplicates);
    }

    if !weighted {
        return builder.get_graph();
    }

    let mut edge_builder = builder.edge_builder()?;
    let mut prop = edge_builder.new_property::<f32>();
    for &w in &weights {
        edge_builder.add_next_edge()?;
        edge_builder.assign_property(&mut prop, w)?;
    }
    let mut props = EdgeProps::new();
    props.insert(WEIGHT_PROPERTY.to_string(), prop.into());
    edge_builder.create_graph(props)
}

fn parse_line(line: &str, line_no: usize) -> GraphResult<ParsedEdge> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 && fields.len() != 3 {
        return Err(GraphError::Parse {
            line: line_no,
            message: format!("expected 2 or 3 fields, got {}", fields.len()),
        });
    }
    let vertex = |s: &str| {
        s.parse::<VertexId>().map_err(|e| GraphError::Parse {
            line: line_no,
            message: format!("invalid vertex id '{}': {}", s, e),
        })
    };
    let weight = match fields.get(2) {
        Some(s) => Some(s.parse::<f32>().map_err(|e| GraphError::Parse {
            line: line_no,
            message: format!("invalid weight '{}': {}", s, e),
        })?),
        None => None,
    };
    Ok(ParsedEdge {
        u: vertex(fields[0])?,
        v: vertex(fields[1])?,
        weight,
    })
}
