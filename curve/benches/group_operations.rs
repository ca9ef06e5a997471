use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecurve::{curves, CachedCurve, CurveOps, EllipticCurve, RandomScalar, ResultCache};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn both_modes(name: &str) -> [(&'static str, EllipticCurve); 2] {
    [
        ("affine", curves::lookup(name, false).unwrap()),
        ("projective", curves::lookup(name, true).unwrap()),
    ]
}

fn bench_double(c: &mut Criterion) {
    let mut group = c.benchmark_group("double");

    for (mode, curve) in both_modes(curves::SECP256K1) {
        let g = curve.generator().clone();
        group.bench_function(mode, |bencher| {
            bencher.iter(|| black_box(curve.double_point(black_box(&g))))
        });
    }
    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for (mode, curve) in both_modes(curves::SECP256K1) {
        let g = curve.generator().clone();
        let h = curve.double_point(&g).unwrap();
        group.bench_function(mode, |bencher| {
            bencher.iter(|| black_box(curve.add_points(black_box(&g), black_box(&h))))
        });
    }
    group.finish();
}

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_mul");
    group.sample_size(10);

    for name in curves::names() {
        for (mode, curve) in both_modes(name) {
            let mut rng = StdRng::seed_from_u64(42);
            let scalar = curve.random_scalar(&mut rng);
            let g = curve.generator().clone();

            group.bench_with_input(BenchmarkId::new(mode, name), name, |bencher, _| {
                bencher.iter(|| black_box(curve.multiply_point(black_box(&scalar), black_box(&g))))
            });
        }
    }
    group.finish();
}

fn bench_cached_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_scalar_mul");

    let curve = curves::get(curves::SECP256K1).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = curve.random_scalar(&mut rng);
    let g = curve.generator().clone();

    let cached = CachedCurve::with_capacity(curve.clone(), 1024);
    let uncached = CachedCurve::new(curve, Arc::new(ResultCache::disabled()));

    group.bench_function("hit", |bencher| {
        bencher.iter(|| black_box(cached.multiply_point(black_box(&scalar), black_box(&g))))
    });
    group.bench_function("disabled", |bencher| {
        bencher.iter(|| black_box(uncached.multiply_point(black_box(&scalar), black_box(&g))))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_double,
    bench_add,
    bench_scalar_mul,
    bench_cached_scalar_mul
);
criterion_main!(benches);
