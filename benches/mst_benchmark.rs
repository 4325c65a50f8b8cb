use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use petgraph::algo::min_spanning_tree;
use petgraph::graph::UnGraph;
use spanning::{kruskal, prim, RandomGraphGenerator};

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");

    // (nodes, edges): sparse to dense
    for (n, m) in [(100, 300), (1_000, 5_000), (1_000, 100_000)] {
        let graph = RandomGraphGenerator::seeded(7).generate(n, m, 1i64, 1_000).unwrap();
        let label = format!("n{n}_m{m}");

        group.bench_with_input(BenchmarkId::new("prim", &label), &graph, |b, g| {
            b.iter(|| black_box(prim(g, 0).unwrap().total_weight));
        });

        group.bench_with_input(BenchmarkId::new("kruskal", &label), &graph, |b, g| {
            b.iter(|| black_box(kruskal(g).total_weight));
        });

        let mut pg = UnGraph::<(), i64>::with_capacity(n, m);
        let nodes: Vec<_> = (0..n).map(|_| pg.add_node(())).collect();
        for e in graph.edges() {
            pg.add_edge(nodes[e.from], nodes[e.to], e.weight);
        }
        group.bench_with_input(BenchmarkId::new("petgraph", &label), &pg, |b, g| {
            b.iter(|| black_box(min_spanning_tree(g).count()));
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_n1000_m10000", |b| {
        let mut generator = RandomGraphGenerator::seeded(1);
        b.iter(|| black_box(generator.generate(1_000, 10_000, 1i64, 20).unwrap().edge_count()));
    });
}

criterion_group!(benches, bench_mst, bench_generate);
criterion_main!(benches);
