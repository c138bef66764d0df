use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use quadgap::hull::MaxQueryCht;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Lines shaped like the engine's gap candidates: slope `2*p*k`,
/// intercept `baseline - p*k^2`.
fn gap_lines(rng: &mut StdRng, count: usize, penalty: i64) -> Vec<(i64, i64)> {
    (0..count as i64)
        .map(|k| {
            let baseline = rng.gen_range(-1_000..1_000);
            (2 * penalty * k, baseline - penalty * k * k)
        })
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let lines = gap_lines(&mut rng, 10_000, 3);

    let mut group = c.benchmark_group("hull_ops");
    group.bench_function("insert_10k", |b| {
        b.iter(|| {
            let mut hull = MaxQueryCht::new();
            for &(m, c) in &lines {
                hull.insert(m, c);
            }
            black_box(hull.len());
        });
    });
    group.bench_function("interleaved_10k", |b| {
        b.iter(|| {
            let mut hull = MaxQueryCht::new();
            let mut acc = 0i64;
            for (x, &(m, c)) in lines.iter().enumerate() {
                hull.insert(m, c);
                acc = acc.wrapping_add(hull.query(x as i64 + 1).unwrap_or(0));
            }
            black_box(acc);
        });
    });
    group.bench_function("query_sweep_10k", |b| {
        b.iter_batched(
            || {
                let mut hull = MaxQueryCht::new();
                for &(m, c) in &lines {
                    hull.insert(m, c);
                }
                hull
            },
            |mut hull| {
                for x in 0..10_000 {
                    black_box(hull.query(x));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
