//! Propagation micro-benchmark.
//!
//! Measures the overhead of the generated procedures over plain evaluation:
//! - Direct evaluation of the function at the nominal point
//! - Arity 2 with both arguments uncertain
//! - Arity 8 mixing uncertain and plain arguments
//! - Arity 20, the ceiling, all uncertain
//! - Normalization of the combined result

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use unc_core::prelude::*;

fn area(l: f64, w: f64) -> f64 {
    l * w
}

fn bench_direct(c: &mut Criterion) {
    c.bench_function("direct_area", |b| {
        b.iter(|| area(black_box(2.0), black_box(4.0)));
    });
}

fn bench_arity_2(c: &mut Criterion) {
    let l = Uncertain::new(2.0, 0.1);
    let w = Uncertain::new(4.0, 0.2);

    c.bench_function("propagate_error_2", |b| {
        b.iter(|| propagate_error!(area, black_box(l), black_box(w)));
    });
}

fn bench_arity_8_mixed(c: &mut Criterion) {
    let x = Uncertain::new(1.5, 0.05);
    let y = Uncertain::new(-0.5, 0.01);

    c.bench_function("propagate_error_8_mixed", |b| {
        b.iter(|| {
            propagate_error!(
                |a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64, h: f64| {
                    a * b + c * d - e / f + g * h
                },
                black_box(x),
                2.0_f64,
                black_box(y),
                3.0_f64,
                black_box(x),
                4.0_f64,
                black_box(y),
                5.0_f64,
            )
        });
    });
}

fn bench_arity_20(c: &mut Criterion) {
    let u = Uncertain::new(1.0, 0.1);

    c.bench_function("propagate_deviations_20", |b| {
        b.iter(|| {
            propagate_deviations!(
                |a0: f64, a1: f64, a2: f64, a3: f64, a4: f64, a5: f64, a6: f64,
                 a7: f64, a8: f64, a9: f64, a10: f64, a11: f64, a12: f64, a13: f64,
                 a14: f64, a15: f64, a16: f64, a17: f64, a18: f64, a19: f64| {
                    a0 + a1 + a2 + a3 + a4 + a5 + a6 + a7 + a8 + a9
                        + a10 + a11 + a12 + a13 + a14 + a15 + a16 + a17 + a18 + a19
                },
                u, u, u, u, u, u, u, u, u, u,
                u, u, u, u, u, u, u, u, u, black_box(u)
            )
        });
    });
}

fn bench_normalize(c: &mut Criterion) {
    let x = Uncertain::new(1.23456, 0.98765);

    c.bench_function("normalize_2", |b| {
        b.iter(|| black_box(x).normalize(2));
    });
}

criterion_group!(
    benches,
    bench_direct,
    bench_arity_2,
    bench_arity_8_mixed,
    bench_arity_20,
    bench_normalize,
);
criterion_main!(benches);
