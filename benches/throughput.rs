use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ringchunk::{Policy, Store};

const MSGS: u64 = 1_000_000;

fn bench_push_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_shift");
    group.throughput(Throughput::Elements(MSGS));

    for chunk_len in [8usize, 64, 256].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("chunk_{chunk_len}")),
            chunk_len,
            |b, &chunk_len| {
                let payload = vec![0xABu8; chunk_len];
                let capacity = ringchunk::round_up_power_of_two((chunk_len + 2) * 4);

                b.iter(|| {
                    let mut store = Store::new(capacity).unwrap();
                    let mut out = vec![0u8; chunk_len];

                    for _ in 0..MSGS {
                        store.push(&payload, Policy::TailDrop).unwrap();
                        let len = store.shift(&mut out).unwrap();
                        black_box(len);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_head_drop_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("head_drop_steady_state");
    group.throughput(Throughput::Elements(MSGS));

    group.bench_function("capacity_4096", |b| {
        let payload = [0u8; 32];
        b.iter(|| {
            let mut store = Store::new(4096).unwrap();
            for _ in 0..MSGS {
                store.push(&payload, Policy::HeadDrop).unwrap();
            }
            black_box(store.count());
        });
    });

    group.finish();
}

fn bench_cursor_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_walk");

    group.bench_function("walk_4096_resident_chunks", |b| {
        let mut store = Store::new(1 << 20).unwrap();
        let payload = [0u8; 32];
        while store.push(&payload, Policy::TailDrop).is_ok() {}

        b.iter(|| {
            let mut cursor = store.cursor();
            let mut out = [0u8; 32];
            let mut seen = 0u64;
            while cursor.next(&store, &mut out).is_ok() {
                seen += 1;
            }
            black_box(seen);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_shift,
    bench_head_drop_steady_state,
    bench_cursor_walk
);
criterion_main!(benches);
