//! Criterion microbenches for the solver hot paths.
//! Sizes: n in {100, 1_000, 10_000}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use layout_prims::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_vec(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_prims(c: &mut Criterion) {
    let mut group = c.benchmark_group("prims");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("random_permutation", n), &n, |b, &n| {
            let mut stream = RandomStream::seeded(42);
            b.iter(|| random_permutation(n, &mut stream))
        });

        group.bench_with_input(BenchmarkId::new("rank_ascending", n), &n, |b, &n| {
            let v = random_vec(n, 43);
            b.iter(|| rank_ascending(&v))
        });

        group.bench_with_input(BenchmarkId::new("saxpy_dot", n), &n, |b, &n| {
            let x = random_vec(n, 44);
            b.iter_batched(
                || random_vec(n, 45),
                |mut y| {
                    saxpy_into_y(&x, &mut y, 0.5).unwrap();
                    dot(&x, &y).unwrap()
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("scale_to_box", n), &n, |b, &n| {
            b.iter_batched(
                || random_vec(2 * n, 46),
                |mut coords| {
                    let mut ps = PointSetMut::new(&mut coords, n, 2).unwrap();
                    scale_to_box(BBox2::new(0.0, 0.0, 800.0, 600.0), &mut ps).unwrap()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prims);
criterion_main!(benches);
