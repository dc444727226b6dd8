use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqalgos::cs::combinatorial::{combinations_of, permutations_of};

fn bench_permutations(c: &mut Criterion) {
    let items: Vec<u32> = (0..8).collect();
    let mut group = c.benchmark_group("permutations");
    for r in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(r), &r, |b, &r| {
            b.iter(|| permutations_of(black_box(&items), r))
        });
    }
    group.finish();
}

fn bench_combinations(c: &mut Criterion) {
    let items: Vec<u32> = (0..20).collect();
    let mut group = c.benchmark_group("combinations");
    for r in [2usize, 5, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(r), &r, |b, &r| {
            b.iter(|| combinations_of(black_box(&items), r))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_permutations, bench_combinations);
criterion_main!(benches);
