use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seqalgos::cs::select::{par_top_by_key, top, top_by_key};

fn random_values(len: usize) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_top_k(c: &mut Criterion) {
    let values = random_values(100_000);
    let mut group = c.benchmark_group("top_k");
    for &k in &[1usize, 10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("bounded_heap", k), &k, |b, &k| {
            b.iter(|| top(black_box(values.iter()), k))
        });
        group.bench_with_input(BenchmarkId::new("keyed", k), &k, |b, &k| {
            b.iter(|| top_by_key(black_box(values.iter()), k, |v| **v >> 8))
        });
        group.bench_with_input(BenchmarkId::new("parallel", k), &k, |b, &k| {
            b.iter(|| par_top_by_key(black_box(&values), k, |&v| v))
        });
        group.bench_with_input(BenchmarkId::new("full_sort", k), &k, |b, &k| {
            b.iter(|| {
                let mut sorted = black_box(values.clone());
                sorted.sort_unstable_by(|a, b| b.cmp(a));
                sorted.truncate(k);
                sorted
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_top_k);
criterion_main!(benches);
