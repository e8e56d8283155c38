
use chart_core::downsample::compress_by_mean;
use chart_core::emit::to_python_array;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_trace(n: usize) -> Vec<f64> {
    // decaying waveform, roughly an annealing distance trace
    (0..n)
        .map(|i| (i as f64 * 0.01).sin() * 10.0 + 5000.0 / (1.0 + i as f64 * 0.001))
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_by_mean");
    for &n in &[100_000usize, 1_000_000usize] {
        let data = gen_trace(n);
        for &target in &[1_000usize, 5_000usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_t{target}")), &target, |b, &t| {
                b.iter(|| black_box(compress_by_mean(black_box(&data), t)));
            });
        }
    }
    group.finish();
}

fn bench_emit(c: &mut Criterion) {
    let data = gen_trace(1_000);
    c.bench_function("to_python_array_1k", |b| b.iter(|| black_box(to_python_array(black_box(&data)))));
}

criterion_group!(benches, bench_compress, bench_emit);
criterion_main!(benches);
