use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use flowmap::Collection;

const N: usize = 10_000;

// ─── Helper functions to generate input sequences ───────────────────────────

fn ordered_values(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_values(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut values = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        values.push((x >> 33) as i64);
    }
    values
}

// ─── Construction benchmarks ────────────────────────────────────────────────

fn bench_from_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_values");
    let values = ordered_values(N);

    group.bench_function(BenchmarkId::new("Collection", N), |b| {
        b.iter(|| Collection::from_values(values.clone()));
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| values.clone());
    });

    group.finish();
}

// ─── Element-wise transform benchmarks ──────────────────────────────────────

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    let line = Collection::from_values(random_values(N));
    let values = random_values(N);

    group.bench_function(BenchmarkId::new("Collection", N), |b| {
        b.iter(|| line.map(|v| v.wrapping_mul(2)));
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| values.iter().map(|v| v.wrapping_mul(2)).collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let line = Collection::from_values(random_values(N));
    let values = random_values(N);

    group.bench_function(BenchmarkId::new("Collection", N), |b| {
        b.iter(|| line.filter(|v, _| v % 2 == 0));
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| values.iter().filter(|v| *v % 2 == 0).copied().collect::<Vec<_>>());
    });

    group.finish();
}

// ─── Structural transform benchmarks ────────────────────────────────────────

fn bench_group_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by");
    let line = Collection::from_values(random_values(N));

    group.bench_function(BenchmarkId::new("Collection", N), |b| {
        b.iter(|| line.group_by(|v, _| v.rem_euclid(16)));
    });

    group.finish();
}

fn bench_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk");
    let line = Collection::from_values(ordered_values(N));

    group.bench_function(BenchmarkId::new("Collection", N), |b| {
        b.iter(|| line.chunk(64).unwrap());
    });

    group.finish();
}

fn bench_zip(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip");
    let left = Collection::from_values(ordered_values(N));
    let right = Collection::from_values(random_values(N));

    group.bench_function(BenchmarkId::new("Collection", N), |b| {
        b.iter(|| left.zip(&right));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_from_values,
    bench_map,
    bench_filter,
    bench_group_by,
    bench_chunk,
    bench_zip
);
criterion_main!(benches);
