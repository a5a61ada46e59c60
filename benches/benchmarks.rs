//! Criterion benchmarks for int-adjacency.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use int_adjacency::graph::{
    are_vertex_sets_connected, connected_components, from_vertex_pairs, induce_by_vertices,
    EdgeBuilder, IntAdjacencyGraph, UniqueEdgeBuilder,
};
use int_adjacency::types::{EdgeProps, VertexId};

/// Random simple edge list, bond-like: every vertex links to distinct nearby ids.
///
/// Offsets are below 64 and `vertex_count` is far larger, so no pair is
/// generated twice from either endpoint.
fn make_edge_list(
    vertex_count: usize,
    edges_per_vertex: usize,
) -> (Vec<VertexId>, Vec<VertexId>) {
    let mut rng = rand::thread_rng();
    let mut xs = Vec::with_capacity(vertex_count * edges_per_vertex);
    let mut ys = Vec::with_capacity(vertex_count * edges_per_vertex);
    for i in 0..vertex_count {
        for k in rand::seq::index::sample(&mut rng, 63, edges_per_vertex) {
            let j = (i + k + 1) % vertex_count;
            xs.push(i as VertexId);
            ys.push(j as VertexId);
        }
    }
    (xs, ys)
}

fn make_large_graph(vertex_count: usize, edges_per_vertex: usize) -> IntAdjacencyGraph {
    let (xs, ys) = make_edge_list(vertex_count, edges_per_vertex);
    let mut builder = UniqueEdgeBuilder::new(vertex_count).unwrap();
    for (&x, &y) in xs.iter().zip(&ys) {
        builder.add_edge(x, y).unwrap();
    }
    builder.get_graph().unwrap()
}

fn bench_bulk_build(c: &mut Criterion) {
    let (xs, ys) = make_edge_list(100_000, 2);

    c.bench_function("bulk_build_100k", |b| {
        b.iter(|| from_vertex_pairs(100_000, xs.clone(), ys.clone()).unwrap())
    });
}

fn bench_bulk_build_with_property(c: &mut Criterion) {
    let (xs, ys) = make_edge_list(100_000, 2);
    let order: Vec<i8> = (0..xs.len()).map(|i| (i % 3) as i8 + 1).collect();

    c.bench_function("bulk_build_property_100k", |b| {
        b.iter(|| {
            let mut builder = EdgeBuilder::new(100_000, xs.clone(), ys.clone()).unwrap();
            let mut prop = builder.new_property::<i8>();
            for &o in &order {
                builder.add_next_edge().unwrap();
                builder.assign_property(&mut prop, o).unwrap();
            }
            let mut props = EdgeProps::new();
            props.insert("order".into(), prop.into());
            builder.create_graph(props).unwrap()
        })
    });
}

fn bench_unique_build(c: &mut Criterion) {
    let (xs, ys) = make_edge_list(100_000, 2);

    c.bench_function("unique_build_100k", |b| {
        b.iter(|| {
            let mut builder = UniqueEdgeBuilder::new(100_000).unwrap();
            for (&x, &y) in xs.iter().zip(&ys) {
                builder.add_edge(x, y).unwrap();
            }
            builder.get_graph().unwrap()
        })
    });
}

fn bench_edge_lookup(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 2);
    let mut rng = rand::thread_rng();
    let pairs: Vec<(VertexId, VertexId)> = (0..10_000)
        .map(|_| {
            let i = rng.gen_range(0..100_000u32);
            (i, (i + rng.gen_range(1..64)) % 100_000)
        })
        .collect();

    c.bench_function("edge_index_10k_lookups", |b| {
        b.iter(|| pairs.iter().filter(|&&(i, j)| graph.edge_index(i, j).is_some()).count())
    });
}

fn bench_components(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 1);

    c.bench_function("components_100k", |b| b.iter(|| connected_components(&graph)));
}

fn bench_induce(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 2);
    let subset: Vec<VertexId> = (0..100_000).step_by(2).collect();

    c.bench_function("induce_half_100k", |b| {
        b.iter(|| induce_by_vertices(&graph, &subset).unwrap())
    });
}

fn bench_connectivity(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 2);

    c.bench_function("connected_depth4_100k", |b| {
        b.iter(|| are_vertex_sets_connected(&graph, &[10, 11, 12], &[99_000], 4).unwrap())
    });
}

criterion_group!(
    benches,
    bench_bulk_build,
    bench_bulk_build_with_property,
    bench_unique_build,
    bench_edge_lookup,
    bench_components,
    bench_induce,
    bench_connectivity,
);
criterion_main!(benches);
