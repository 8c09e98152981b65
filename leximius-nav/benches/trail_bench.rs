//! Benchmarks for the breadcrumb engine
//!
//! Compares mapped parent-chain resolution against the segment fallback.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use leximius_nav::{BreadcrumbDisplay, BreadcrumbEngine, BreadcrumbMap};

fn bench_mapped_trail(c: &mut Criterion) {
    let engine = BreadcrumbEngine::new(BreadcrumbMap::builtin());
    c.bench_function("trail_mapped_chain", |b| {
        b.iter(|| {
            let trail = engine.trail(black_box("/library/components/button"));
            black_box(trail)
        })
    });
}

fn bench_fallback_trail(c: &mut Criterion) {
    let engine = BreadcrumbEngine::new(BreadcrumbMap::builtin());
    c.bench_function("trail_segment_fallback", |b| {
        b.iter(|| {
            let trail = engine.trail(black_box("/library/components/date-picker"));
            black_box(trail)
        })
    });
}

fn bench_root_trail(c: &mut Criterion) {
    let engine = BreadcrumbEngine::new(BreadcrumbMap::builtin());
    c.bench_function("trail_root", |b| {
        b.iter(|| {
            let trail = engine.trail(black_box("/"));
            black_box(trail)
        })
    });
}

fn bench_display_hints(c: &mut Criterion) {
    c.bench_function("display_hints", |b| {
        b.iter(|| {
            let display = BreadcrumbDisplay::for_path(black_box("/dashboard/settings"));
            black_box(display)
        })
    });
}

criterion_group!(
    benches,
    bench_mapped_trail,
    bench_fallback_trail,
    bench_root_trail,
    bench_display_hints
);
criterion_main!(benches);
