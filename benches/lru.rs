use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lru_bench::{KeyGenerator, LruCache, Workload};

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.throughput(Throughput::Elements(1));

    group.bench_function("capacity_1000", |b| {
        let mut cache = LruCache::new(1_000).unwrap();
        for key in 0..1_000u64 {
            cache.put(key, key);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1_000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_put_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_evicting");
    group.throughput(Throughput::Elements(1));

    group.bench_function("capacity_1000", |b| {
        let mut cache = LruCache::new(1_000).unwrap();
        let mut counter = 0u64;
        b.iter(|| {
            // Keys never repeat, so every put past the first 1000 evicts.
            cache.put(black_box(counter), counter);
            counter += 1;
        });
    });

    group.finish();
}

fn bench_read_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_through");
    group.throughput(Throughput::Elements(1));

    for workload in [Workload::Uniform, Workload::hotspot()] {
        for capacity in [100usize, 1_000, 5_000] {
            let id = BenchmarkId::new(workload.to_string(), capacity);
            group.bench_with_input(id, &capacity, |b, &capacity| {
                let mut cache = LruCache::new(capacity).unwrap();
                let mut keys = KeyGenerator::new(10_000, workload, 42).unwrap();
                b.iter(|| {
                    let key = keys.next_key();
                    if cache.get(&key).is_none() {
                        cache.put(key, key);
                    }
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_put_evicting, bench_read_through);
criterion_main!(benches);
