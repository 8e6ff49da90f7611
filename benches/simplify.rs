//! Benchmarks for the simplification pipeline and its stages.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tracesimp::simplify::{douglas_peucker, radial_distance, simplify};
use tracesimp::Point2;

/// Generates a noisy sine wave polyline.
fn generate_sine_wave(num_points: usize) -> Vec<Point2<f64>> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64 * 4.0 * std::f64::consts::PI;
            let noise = ((i * 17) % 100) as f64 / 1000.0; // Deterministic "noise"
            Point2::new(t, t.sin() + noise)
        })
        .collect()
}

/// Generates a random walk polyline.
fn generate_random_walk(num_points: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(num_points);
    let mut x = 0.0;
    let mut y = 0.0;
    let mut state = seed;

    for _ in 0..num_points {
        points.push(Point2::new(x, y));

        // Simple xorshift for deterministic "random" steps
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;

        let angle = (state as f64 / u64::MAX as f64) * 2.0 * std::f64::consts::PI;
        x += angle.cos() * 0.1;
        y += angle.sin() * 0.1;
    }

    points
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");

    for size in [1000, 10000, 100000] {
        let points = generate_random_walk(size, 12345);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("radial_then_rdp", size), &points, |b, pts| {
            b.iter(|| simplify(black_box(pts), black_box(Some(0.3)), false))
        });

        group.bench_with_input(BenchmarkId::new("highest_quality", size), &points, |b, pts| {
            b.iter(|| simplify(black_box(pts), black_box(Some(0.3)), true))
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    for size in [1000, 10000, 50000] {
        let points = generate_sine_wave(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("radial", size), &points, |b, pts| {
            b.iter(|| radial_distance(black_box(pts), black_box(0.0001)))
        });

        group.bench_with_input(BenchmarkId::new("douglas_peucker", size), &points, |b, pts| {
            b.iter(|| douglas_peucker(black_box(pts), black_box(0.0001)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simplify, bench_stages);
criterion_main!(benches);
