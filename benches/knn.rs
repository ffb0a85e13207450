use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nearthree::{distance_sq, Entry, Point3, SpatialIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 4] = [1000, 10_000, 100_000, 1_000_000];
const K: usize = 5;

fn random_points(count: usize) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)])
        .collect()
}

fn brute_force(points: &[Point3], target: Point3, k: usize) -> Vec<(usize, f64)> {
    let mut all: Vec<(usize, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, distance_sq(&target, p)))
        .collect();
    all.sort_unstable_by(|a, b| a.1.total_cmp(&b.1));
    all.truncate(k);
    all
}

fn benchmark_knn(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_nearest");

    for &size in &SIZES {
        let points = random_points(size);
        let index = SpatialIndex::build_par(
            points.iter().enumerate().map(|(i, p)| Entry::new(i, *p, i)).collect(),
        );
        // Query the neighbors of an indexed entity, the common case.
        let origin = size / 2;

        group.bench_with_input(BenchmarkId::new("kdtree", size), &size, |b, &_s| {
            b.iter(|| index.k_nearest(black_box(points[origin]), K, Some(&origin)))
        });

        if size <= 100_000 {
            group.bench_with_input(BenchmarkId::new("brute_force", size), &size, |b, &_s| {
                b.iter(|| brute_force(&points, black_box(points[origin]), K + 1))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_knn);
criterion_main!(benches);
