use criterion::{Criterion, criterion_group, criterion_main};
use expense_charts::api::{LineChart, LineChartConfig, PieChart, PieChartConfig};
use expense_charts::core::{
    CategoryTotals, DayPoint, PlotInsets, Record, SeriesInput, Viewport, build_wedge_layout,
    densify_series, project_line_chart,
};
use expense_charts::render::{LINE_SERIES_PALETTE, NullRenderer, PIE_PALETTE};
use std::hint::black_box;

fn generated_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let category = format!("category-{}", i % 24);
            let amount = 10.0 + (i % 97) as f64 * 3.5;
            Record::new(category, amount, (i as i64) * 3_600)
        })
        .collect()
}

fn generated_series(days: i64) -> Vec<SeriesInput> {
    LINE_SERIES_PALETTE
        .iter()
        .enumerate()
        .map(|(index, color)| {
            let points = (0..days)
                .filter(|day| (day + index as i64) % 3 != 0)
                .map(|day| DayPoint::new(day, ((day * 37 + index as i64 * 11) % 500) as f64))
                .collect();
            SeriesInput::new(format!("series-{index}"), *color, points)
        })
        .collect()
}

fn bench_wedge_layout_10k(c: &mut Criterion) {
    let records = generated_records(10_000);

    c.bench_function("wedge_layout_10k", |b| {
        b.iter(|| {
            let totals = CategoryTotals::from_records(black_box(&records));
            let _ = build_wedge_layout(&totals, black_box(&PIE_PALETTE));
        })
    });
}

fn bench_densify_and_project_365(c: &mut Criterion) {
    let series = generated_series(365);
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("densify_and_project_365", |b| {
        b.iter(|| {
            let dataset = densify_series(black_box(&series)).expect("dataset");
            let _ = project_line_chart(&dataset, black_box(viewport), PlotInsets::default());
        })
    });
}

fn bench_pie_render_frame(c: &mut Criterion) {
    let config = PieChartConfig::new(Viewport::new(1080, 1080));
    let mut engine = PieChart::new(NullRenderer::default(), config).expect("pie init");
    engine.set_payloads(generated_records(2_000));
    engine.set_center_text("12345", "this month");

    c.bench_function("pie_render_frame", |b| {
        b.iter(|| {
            let _ = engine.build_render_frame().expect("frame");
        })
    });
}

fn bench_line_render_frame_cached_geometry(c: &mut Criterion) {
    let config = LineChartConfig::new(Viewport::new(1600, 900));
    let mut engine = LineChart::new(NullRenderer::default(), config).expect("line init");
    engine.set_data(generated_series(90));

    c.bench_function("line_render_frame_cached_geometry", |b| {
        b.iter(|| {
            let _ = engine.build_render_frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_wedge_layout_10k,
    bench_densify_and_project_365,
    bench_pie_render_frame,
    bench_line_render_frame_cached_geometry
);
criterion_main!(benches);
