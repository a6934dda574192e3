//! Criterion benchmarks for RAMBO phase-space generation.
//!
//! Measures per-event cost for massless and massive final states across
//! multiplicities, and the throughput of sequential vs parallel sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hazma_rambo::{EnergyHistogram, PhaseSpaceRng, Rambo};

/// Energy far enough above threshold for every multiplicity benchmarked.
const CME: f64 = 5000.0;

/// Benchmark single-event generation as the multiplicity grows.
fn bench_single_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_event");

    for n in [2, 3, 5, 8] {
        let massless = Rambo::new(vec![0.0; n]).unwrap();
        let massive = Rambo::new(vec![139.57; n]).unwrap();

        group.bench_with_input(BenchmarkId::new("massless", n), &massless, |b, rambo| {
            let mut rng = PhaseSpaceRng::from_seed(42);
            b.iter(|| rambo.generate_point(black_box(CME), &mut rng).unwrap());
        });

        // Includes the Newton-Raphson rescaling
        group.bench_with_input(BenchmarkId::new("massive", n), &massive, |b, rambo| {
            let mut rng = PhaseSpaceRng::from_seed(42);
            b.iter(|| rambo.generate_point(black_box(CME), &mut rng).unwrap());
        });
    }

    group.finish();
}

/// Benchmark sequential vs rayon sampling of a full sample.
fn bench_sample_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_throughput");
    let rambo = Rambo::new(vec![139.57, 139.57, 134.98]).unwrap();

    for num_points in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(num_points as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", num_points),
            &num_points,
            |b, &n| {
                b.iter(|| {
                    let mut rng = PhaseSpaceRng::from_seed(7);
                    rambo.generate_phase_space(black_box(1000.0), n, &mut rng).unwrap()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", num_points),
            &num_points,
            |b, &n| {
                b.iter(|| {
                    rambo
                        .generate_phase_space_par(black_box(1000.0), n, 7)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark histogramming an existing sample.
fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_histogram");
    let rambo = Rambo::new(vec![0.511, 0.0, 0.0]).unwrap();
    let mut rng = PhaseSpaceRng::from_seed(1);
    let points = rambo.generate_phase_space(105.66, 50_000, &mut rng).unwrap();

    for num_bins in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("from_points", num_bins),
            &num_bins,
            |b, &bins| {
                b.iter(|| EnergyHistogram::from_points(black_box(&points), 0, bins).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_event,
    bench_sample_throughput,
    bench_histogram
);
criterion_main!(benches);
