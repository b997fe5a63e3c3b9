use barchart_core::{layout_bars, Dataset, ZeroMaxPolicy};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_dataset(n: usize) -> Dataset {
    let values = (0..n).map(|i| ((i * 7919) % 97) as f64).collect();
    Dataset::new(values).expect("valid dataset")
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_bars");
    for &n in &[1_000usize, 100_000usize] {
        group.bench_function(format!("n_{n}"), |b| {
            let data = build_dataset(n);
            b.iter(|| {
                let layout =
                    layout_bars(&data, 960.0, 500.0, ZeroMaxPolicy::Reject).expect("layout");
                black_box(layout);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
