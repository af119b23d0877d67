use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use futures_util::StreamExt;
use rs2_seq::{from, to};
use tokio::runtime::Runtime;

fn bench_push_operations(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("push_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("map_filter", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result: Vec<u64> = from::iter(0..size)
                    .map(|x: u64| black_box(x * 2))
                    .filter(|x| black_box(x % 4 == 0))
                    .collect()
                    .await;
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("reduce", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = to::reduce(from::iter(0..size), 0u64, |acc, x: u64| {
                    (black_box(acc + x), true)
                })
                .await;
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("flatten_vec", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = from::iter((0..size / 100).map(|i: u64| (i..i + 100).collect::<Vec<_>>()))
                    .flatten_vec()
                    .len()
                    .await;
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_pull_operations(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("pull_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("pair_wise", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = from::iter(0..size).pair_wise().len().await;
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("zip", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = from::iter(0..size)
                    .zip(from::iter((0..size).rev()))
                    .map21(|a: u64, b: u64| a + b)
                    .len()
                    .await;
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("take_n_half", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = from::iter(0..size).take_n(size as usize / 2).len().await;
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_vs_futures_stream(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("vs_futures_stream");
    let size: u64 = 10_000;

    group.bench_function("seq_map_collect", |b| {
        b.to_async(&rt).iter(|| async move {
            let result: Vec<u64> = from::iter(0..size).map(|x| x + 1).collect().await;
            black_box(result)
        });
    });

    group.bench_function("stream_map_collect", |b| {
        b.to_async(&rt).iter(|| async move {
            let result: Vec<u64> = futures::stream::iter(0..size).map(|x| x + 1).collect().await;
            black_box(result)
        });
    });

    group.bench_function("seq_as_stream", |b| {
        b.to_async(&rt).iter(|| async move {
            let result: Vec<u64> = from::iter(0..size).pull().map(|x| x + 1).collect().await;
            black_box(result)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_operations,
    bench_pull_operations,
    bench_vs_futures_stream
);
criterion_main!(benches);
