use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use popchart_core::{build_bar_chart, BarChart, PopulationRecord, RenderOptions};

fn rows(n: usize) -> Vec<PopulationRecord> {
    let regions = ["Asia", "Europe", "North America", "South America", "Africa", "Oceania"];
    (0..n)
        .map(|i| PopulationRecord::new(format!("Country {i}"), 1_400_000_000 / (i as u64 + 1), regions[i % regions.len()]))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let data = rows(12);
    c.bench_function("build_bar_chart_12", |b| b.iter(|| black_box(build_bar_chart(2021, black_box(&data)))));
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &labels in &[false, true] {
        group.bench_function(format!("top12_labels_{labels}"), |b| {
            let config = build_bar_chart(2021, &rows(12)).expect("chart");
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = labels;
            b.iter(|| -> Result<()> {
                let bytes = BarChart::from_config(&config).render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
