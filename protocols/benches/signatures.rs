use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ecprotocols::{DEFAULT_ALPHABET_SIZE, DigitalSignature, Koblitz};
use ecurve::{CachedCurve, ResultCache, curves};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let curve = curves::get(curves::SECP256K1).expect("curve");
    let ds = DigitalSignature::random(curve, &mut rng).expect("keys");
    let hash = BigUint::from(0xDEADBEEFu32);

    c.bench_function("ecdsa_sign", |bencher| {
        bencher.iter(|| {
            let sig = ds.generate_signature(&mut rng, black_box(&hash)).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_verify");
    let mut rng = StdRng::seed_from_u64(42);
    let hash = BigUint::from(0xDEADBEEFu32);
    let curve = curves::get(curves::SECP256K1).expect("curve");

    let cached = CachedCurve::with_capacity(curve.clone(), 1024);
    let uncached = CachedCurve::new(curve, Arc::new(ResultCache::disabled()));

    for (name, curve) in [("cached", cached), ("uncached", uncached)] {
        let ds = DigitalSignature::new(curve, BigUint::from(123456789u32)).expect("keys");
        let sig = ds.generate_signature(&mut rng, &hash).expect("sign");

        group.bench_function(name, |bencher| {
            bencher.iter(|| {
                let ok = ds
                    .verify_signature(ds.public_key(), black_box(&hash), black_box(&sig))
                    .expect("verify");
                black_box(ok);
            })
        });
    }
    group.finish();
}

fn bench_koblitz(c: &mut Criterion) {
    let koblitz = Koblitz::new(curves::get(curves::SECP521R1).expect("curve"));
    let message = "Elliptic curves over prime fields";

    c.bench_function("koblitz_encode", |bencher| {
        bencher.iter(|| {
            let encoded = koblitz
                .encode(black_box(message), DEFAULT_ALPHABET_SIZE)
                .expect("encode");
            black_box(encoded);
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify, bench_koblitz);
criterion_main!(benches);
