use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazeru::cache::ShuffleCache;
use mazeru::weighted::{weighted_shuffle, Weighted};
use mazeru::{sample, shuffle_in_place};

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    let sizes = [1_000, 10_000, 100_000];

    for &size in &sizes {
        group.bench_function(format!("in_place_n{}", size), |b| {
            let mut items: Vec<usize> = (0..size).collect();
            b.iter(|| {
                shuffle_in_place(black_box(&mut items));
            })
        });
    }

    for &size in &sizes {
        group.bench_function(format!("bounded_n{}_k100", size), |b| {
            let items: Vec<usize> = (0..size).collect();
            b.iter(|| {
                black_box(sample(black_box(&items), Some(100)));
            })
        });
    }
    group.finish();
}

fn bench_weighted(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted");

    // The draw walk is quadratic, so deck-sized inputs only.
    let sizes = [100, 1_000];

    for &size in &sizes {
        let items: Vec<Weighted<usize>> = (0..size)
            .map(|i| Weighted::new(i, 1.0 + (i % 7) as f64))
            .collect();
        group.bench_function(format!("shuffle_n{}", size), |b| {
            b.iter(|| {
                let out = weighted_shuffle(black_box(items.clone())).expect("weights ok");
                black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");
    let items: Vec<usize> = (0..32).collect();

    group.bench_function("hit", |b| {
        let mut cache = ShuffleCache::new();
        cache.get_or_shuffle("q1", &items);
        b.iter(|| {
            black_box(cache.get_or_shuffle("q1", black_box(&items)).len());
        })
    });

    group.bench_function("miss_then_clear", |b| {
        b.iter(|| {
            let mut cache = ShuffleCache::new();
            black_box(cache.get_or_shuffle("q1", black_box(&items)).len());
            cache.clear();
        })
    });
    group.finish();
}

criterion_group!(benches, bench_shuffle, bench_weighted, bench_cache);
criterion_main!(benches);
