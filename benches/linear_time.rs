use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_mis::mis_finder::solve;
use tree_mis::tree::Tree;

const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];

fn benchmark_tree(c: &mut Criterion, name: &str, build: impl Fn(usize) -> Tree) {
    let mut group = c.benchmark_group(name);
    group.sample_size(10);
    for &n in SIZES {
        let tree = build(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| {
                let result = solve(tree, 1).unwrap();
                assert_eq!(result.max_size(), result.set().len());
            })
        });
    }
    group.finish();
}

fn mis_benchmark(c: &mut Criterion) {
    benchmark_tree(c, "path", |n| Tree::path(n).unwrap());
    benchmark_tree(c, "random", |n| {
        Tree::random(n, &mut StdRng::seed_from_u64(n as u64)).unwrap()
    });
    benchmark_tree(c, "caterpillar", |n| {
        Tree::random_caterpillar(n, &mut StdRng::seed_from_u64(n as u64)).unwrap()
    });
}

criterion_group!(benches, mis_benchmark);
criterion_main!(benches);
