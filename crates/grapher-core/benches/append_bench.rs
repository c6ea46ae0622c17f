use grapher_core::{PlotCanvas, Rgb, SurfaceSize};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_point");
    for &n in &[1_000usize, 10_000usize] {
        // in-range points only patch the cache; growing points force a replot each time
        for &(name, grow) in &[("in_range", false), ("growing", true)] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("{name}_n{n}")), &n, |b, &n| {
                b.iter_batched(
                    || {
                        let mut canvas = PlotCanvas::new(SurfaceSize::new(1024.0, 640.0));
                        let id = canvas.add_plot(vec![0.0], vec![0.0], Rgb::BLUE).expect("valid data");
                        (canvas, id)
                    },
                    |(mut canvas, id)| {
                        for i in 0..n {
                            let t = i as f64 / n as f64;
                            let x = if grow { i as f64 } else { t };
                            canvas.add_point(id, x, (t * 6.28).sin()).expect("finite point");
                        }
                        black_box(canvas);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_append);
criterion_main!(benches);
