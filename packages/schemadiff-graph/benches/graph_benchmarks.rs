//! Graph container benchmarks
//!
//! Measures the two phases comparison algorithms care about:
//! 1. Build: vertex/edge insertion and index maintenance
//! 2. Read: pairwise lookups, incident-edge queries, adjacency search

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use schemadiff_graph::{Edge, SchemaGraph, Vertex, VertexId, VertexKind};

/// Helper: synthetic schema shape — `type_count` object types, each with
/// `fields_per_type` fields wired through "field" edges.
fn build_schema_graph(type_count: usize, fields_per_type: usize) -> SchemaGraph {
    let mut graph = SchemaGraph::with_capacity(
        type_count * (1 + fields_per_type),
        type_count * fields_per_type,
    );
    for t in 0..type_count {
        let type_name = format!("Type{}", t);
        let type_id = graph.add_vertex(Vertex::new(VertexKind::Object).with_name(&type_name));
        graph.add_type(type_name, type_id);
        for f in 0..fields_per_type {
            let field_id = graph
                .add_vertex(Vertex::new(VertexKind::Field).with_name(format!("field{}", f)));
            graph.add_edge(Edge::new(type_id, field_id, "field"));
        }
    }
    graph
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for type_count in [100, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(type_count),
            &type_count,
            |b, &type_count| {
                b.iter(|| build_schema_graph(black_box(type_count), 10));
            },
        );
    }
    group.finish();
}

fn bench_pairwise_lookup(c: &mut Criterion) {
    let graph = build_schema_graph(1_000, 10);
    // each type vertex sits at a stride of (1 + fields_per_type)
    c.bench_function("edge_between_hit", |b| {
        b.iter(|| {
            for t in 0..1_000 {
                let type_id = VertexId(t * 11);
                let field_id = VertexId(t * 11 + 1);
                black_box(graph.edge_between(type_id, field_id));
            }
        });
    });
    c.bench_function("edge_between_miss", |b| {
        b.iter(|| {
            for t in 0..1_000 {
                black_box(graph.edge_between(VertexId(t * 11), VertexId((t * 11 + 22) % 11_000)));
            }
        });
    });
}

fn bench_adjacency(c: &mut Criterion) {
    let graph = build_schema_graph(1_000, 10);
    c.bench_function("edges_from", |b| {
        b.iter(|| {
            for t in 0..1_000 {
                black_box(graph.edges_from(VertexId(t * 11)));
            }
        });
    });
    c.bench_function("find_adjacent", |b| {
        b.iter(|| {
            for t in 0..1_000 {
                black_box(
                    graph.find_adjacent(VertexId(t * 11), |v| v.name_or_empty() == "field9"),
                );
            }
        });
    });
}

fn bench_name_lookup(c: &mut Criterion) {
    let graph = build_schema_graph(1_000, 10);
    c.bench_function("get_type", |b| {
        b.iter(|| {
            for t in 0..1_000 {
                black_box(graph.get_type(&format!("Type{}", t)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_pairwise_lookup,
    bench_adjacency,
    bench_name_lookup
);
criterion_main!(benches);
