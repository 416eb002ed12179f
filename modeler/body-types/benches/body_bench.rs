//! Benchmarks for body editing.
//!
//! Run with: cargo bench -p body-types

#![allow(missing_docs)]

use body_types::{Body, BodyTopology, cuboid};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// A row of `count` cuboids merged into one body.
fn cuboid_row(count: usize) -> Body {
    let mut body = Body::new();
    let unit = cuboid(1.0, 1.0, 1.0);
    for i in 0..count {
        let mut part = unit.clone();
        #[allow(clippy::cast_precision_loss)]
        let dx = i as f64 * 2.0;
        part.transform(&|p: &body_types::Point3<f64>| {
            body_types::Point3::new(p.x + dx, p.y, p.z)
        });
        body.merge(&part);
    }
    body
}

fn bench_remove_vertex(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_vertex");
    for count in [10, 100, 1000] {
        let body = cuboid_row(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.iter(|| {
                let mut body = body.clone();
                body.remove_vertex(black_box(body.vertex_count() / 2));
                body
            });
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for count in [10, 100, 1000] {
        let other = cuboid_row(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &other, |b, other| {
            b.iter(|| {
                let mut body = cuboid(1.0, 1.0, 1.0);
                body.merge(black_box(other));
                body
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_remove_vertex, bench_merge);
criterion_main!(benches);
