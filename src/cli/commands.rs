//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::graph::{
    are_vertex_sets_connected, connected_components, induce_by_vertices, DegreeStats,
    IntAdjacencyGraph,
};
use crate::types::{check_vertex, GraphResult, VertexId};

use super::edge_list::{load_edge_list, WEIGHT_PROPERTY};

/// Summary of a loaded graph.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub vertices: usize,
    pub edges: usize,
    pub slots: usize,
    pub degree: DegreeStats,
    pub properties: Vec<String>,
}

/// Edge lookup between two vertices.
#[derive(Debug, Serialize)]
pub struct EdgeReport {
    pub i: VertexId,
    pub j: VertexId,
    pub edge_index: Option<usize>,
    pub directed_ij: Option<usize>,
    pub directed_ji: Option<usize>,
    pub degree_i: usize,
    pub degree_j: usize,
}

/// Component partition of a graph.
#[derive(Debug, Serialize)]
pub struct ComponentsReport {
    pub component_count: usize,
    pub sizes: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Vec<VertexId>>>,
}

/// One edge of an induced subgraph, in new vertex ids.
#[derive(Debug, Serialize)]
pub struct InducedEdge {
    pub u: VertexId,
    pub v: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

/// Induced subgraph listing.
#[derive(Debug, Serialize)]
pub struct InduceReport {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<InducedEdge>,
}

pub fn info_report(graph: &IntAdjacencyGraph) -> InfoReport {
    InfoReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        slots: graph.slot_count(),
        degree: graph.degree_stats(),
        properties: graph
            .edge_props()
            .iter()
            .map(|(name, prop)| format!("{}:{}", name, prop.type_name()))
            .collect(),
    }
}

pub fn edge_report(graph: &IntAdjacencyGraph, i: VertexId, j: VertexId) -> EdgeReport {
    EdgeReport {
        i,
        j,
        edge_index: graph.edge_index(i, j),
        directed_ij: graph.directed_edge_index(i, j),
        directed_ji: graph.directed_edge_index(j, i),
        degree_i: graph.vertex_edge_count(i),
        degree_j: graph.vertex_edge_count(j),
    }
}

pub fn components_report(graph: &IntAdjacencyGraph, list: bool) -> ComponentsReport {
    let labeling = connected_components(graph);
    let members = list.then(|| {
        let mut members = vec![Vec::new(); labeling.component_count];
        for (v, &c) in labeling.component_index.iter().enumerate() {
            members[c as usize].push(v as VertexId);
        }
        members
    });
    ComponentsReport {
        component_count: labeling.component_count,
        sizes: labeling.component_sizes(),
        members,
    }
}

/// Each undirected edge is listed once, from its smaller endpoint.
pub fn induce_report(
    graph: &IntAdjacencyGraph,
    vertices: &[VertexId],
) -> GraphResult<InduceReport> {
    let sub = induce_by_vertices(graph, vertices)?;
    let weights = sub.edge_prop::<f32>(WEIGHT_PROPERTY);
    let edges = (0..sub.slot_count())
        .filter(|&t| sub.a()[t] < sub.b()[t])
        .map(|t| InducedEdge {
            u: sub.a()[t],
            v: sub.b()[t],
            weight: weights.map(|w| w[t]),
        })
        .collect();
    Ok(InduceReport {
        vertices: vertices.to_vec(),
        edges,
    })
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Display size and degree statistics of an edge list.
pub fn cmd_info(path: &Path, vertex_count: Option<usize>, json: bool) -> GraphResult<()> {
    let graph = load_edge_list(path, vertex_count)?;
    let report = info_report(&graph);
    if json {
        print_json(&report);
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", report.vertices);
        println!("Edges: {}", report.edges);
        println!("Slots: {}", report.slots);
        println!(
            "Degree: min {}, max {}, mean {:.3}",
            report.degree.min, report.degree.max, report.degree.mean
        );
        println!("Isolated vertices: {}", report.degree.isolated);
        if !report.properties.is_empty() {
            println!("Edge properties: {}", report.properties.join(", "));
        }
    }
    Ok(())
}

/// Look up the edge between two vertices.
pub fn cmd_edge(
    path: &Path,
    vertex_count: Option<usize>,
    i: VertexId,
    j: VertexId,
    json: bool,
) -> GraphResult<()> {
    let graph = load_edge_list(path, vertex_count)?;
    check_vertex(i, graph.vertex_count())?;
    check_vertex(j, graph.vertex_count())?;
    let report = edge_report(&graph, i, j);
    if json {
        print_json(&report);
    } else {
        match report.edge_index {
            Some(t) => println!("Edge {}-{} at slot {}", i, j, t),
            None => println!("No edge between {} and {}", i, j),
        }
        println!("Degree of {}: {}", i, report.degree_i);
        println!("Degree of {}: {}", j, report.degree_j);
    }
    Ok(())
}

/// Label connected components.
pub fn cmd_components(
    path: &Path,
    vertex_count: Option<usize>,
    list: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = load_edge_list(path, vertex_count)?;
    let report = components_report(&graph, list);
    if json {
        print_json(&report);
    } else {
        println!("Components: {}", report.component_count);
        for (c, size) in report.sizes.iter().enumerate() {
            match &report.members {
                Some(members) => println!("  #{} ({}): {:?}", c, size, members[c]),
                None => println!("  #{}: {} vertices", c, size),
            }
        }
    }
    Ok(())
}

/// Print the subgraph induced by a vertex subset.
pub fn cmd_induce(
    path: &Path,
    vertex_count: Option<usize>,
    vertices: &[VertexId],
    json: bool,
) -> GraphResult<()> {
    let graph = load_edge_list(path, vertex_count)?;
    let report = induce_report(&graph, vertices)?;
    if json {
        print_json(&report);
    } else {
        println!(
            "Induced on {} vertices, {} edges",
            report.vertices.len(),
            report.edges.len()
        );
        for e in &report.edges {
            let (u, v) = (report.vertices[e.u as usize], report.vertices[e.v as usize]);
            match e.weight {
                Some(w) => println!("  {} {} (was {} {}) weight {}", e.u, e.v, u, v, w),
                None => println!("  {} {} (was {} {})", e.u, e.v, u, v),
            }
        }
    }
    Ok(())
}

/// Test whether two vertex sets are within `max_distance` hops.
pub fn cmd_connected(
    path: &Path,
    vertex_count: Option<usize>,
    mut set_a: Vec<VertexId>,
    mut set_b: Vec<VertexId>,
    max_distance: u32,
    json: bool,
) -> GraphResult<()> {
    let graph = load_edge_list(path, vertex_count)?;
    set_a.sort_unstable();
    set_a.dedup();
    set_b.sort_unstable();
    set_b.dedup();
    let connected = are_vertex_sets_connected(&graph, &set_a, &set_b, max_distance)?;
    if json {
        print_json(&serde_json::json!({
            "a": set_a,
            "b": set_b,
            "max_distance": max_distance,
            "connected": connected,
        }));
    } else {
        let verdict = if connected { "connected" } else { "not connected" };
        println!("Sets are {} within {} hops", verdict, max_distance);
    }
    Ok(())
}
