#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use expense_charts::ChartError;
use expense_charts::api::{LineChart, LineChartConfig, PieChart, PieChartConfig};
use expense_charts::core::{DayPoint, Record, SeriesInput, Viewport};
use expense_charts::render::{CairoRenderer, LINE_SERIES_PALETTE};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_pie_ring_labels_and_centre_text() {
    let renderer = CairoRenderer::new(400, 400).expect("renderer");
    let config = PieChartConfig::new(Viewport::new(400, 400));
    let mut engine = PieChart::new(renderer, config).expect("pie init");
    engine.set_payloads(vec![
        Record::new("Food", 30.0, 0),
        Record::new("Transport", 70.0, 0),
    ]);
    engine.set_center_text("100", "this month");

    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.arcs_drawn, 2);
    assert_eq!(stats.lines_drawn, 2);
    assert_eq!(stats.texts_drawn, 4);
}

#[test]
fn cairo_renderer_draws_line_chart_paths_and_dots() {
    let renderer = CairoRenderer::new(800, 400).expect("renderer");
    let config = LineChartConfig::new(Viewport::new(800, 400));
    let mut engine = LineChart::new(renderer, config).expect("line init");
    engine.set_data(vec![SeriesInput::new(
        "Food",
        LINE_SERIES_PALETTE[0],
        vec![DayPoint::new(0, 10.0), DayPoint::new(2, 0.0)],
    )]);

    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.paths_drawn, 2);
    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.lines_drawn, 10);
    assert_eq!(stats.texts_drawn, 8);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(400, 400).expect("renderer");
    let config = PieChartConfig::new(Viewport::new(400, 400));
    let mut engine = PieChart::new(renderer, config).expect("pie init");
    engine.set_payloads(vec![Record::new("Food", 1.0, 0)]);

    let surface = ImageSurface::create(Format::ARgb32, 400, 400).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    assert!(!engine.needs_redraw());
    assert_eq!(engine.renderer().last_stats().arcs_drawn, 1);
}

#[test]
fn cairo_renderer_exports_png() {
    let renderer = CairoRenderer::new(200, 200).expect("renderer");
    let config = PieChartConfig::new(Viewport::new(200, 200));
    let mut engine = PieChart::new(renderer, config).expect("pie init");
    engine.set_payloads(vec![Record::new("Food", 1.0, 0)]);
    engine.render().expect("render");

    let mut png = Vec::new();
    engine.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
