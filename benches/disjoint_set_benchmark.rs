use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petgraph::unionfind::UnionFind;
use spanning::DisjointSet;

fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("Disjoint Set");

    const N: usize = 10_000;
    const OPS: usize = 100_000;

    group.bench_function("DisjointSet", |b| {
        b.iter(|| {
            let mut ds = DisjointSet::new(N);
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(a, b));
                black_box(ds.find(a));
            }
        })
    });

    group.bench_function("petgraph UnionFind", |b| {
        b.iter(|| {
            let mut ds = UnionFind::<usize>::new(N);
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(a, b));
                black_box(ds.find_mut(a));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_disjoint_set);
criterion_main!(benches);
