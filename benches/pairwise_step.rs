//! Benchmarks for the per-frame pairwise scan.
//!
//! Neighbor detection is intentionally exhaustive (no spatial grid), so a
//! frame costs O(n^2); these benchmarks track that curve as the population
//! grows. Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flock2d::{Flock, FlockConfig};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_step");

    for &count in &[100u32, 250, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let config = FlockConfig::default().with_initial_count(count);
            let mut flock = Flock::new_seeded(config, 640.0, 480.0, 1);
            b.iter(|| {
                flock.step();
                black_box(flock.boids().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
