use crate::core::{DenseDayDataset, LineChartGeometry, ScreenPoint};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::{LineChart, LineChartStyle};

impl<R: Renderer> LineChart<R> {
    /// Materializes grid, axes and every series for the current viewport.
    ///
    /// Paint order: horizontal grid with value labels, vertical grid with day
    /// labels, bottom and left axes, then fill, line and dots per series.
    pub fn build_render_frame(&mut self) -> ChartResult<RenderFrame> {
        self.refresh_geometry();
        let mut frame = RenderFrame::new(self.viewport);
        let (Some(dataset), Some(cached)) = (self.dataset.as_ref(), self.geometry_cache.as_ref())
        else {
            return Ok(frame);
        };
        let geometry = &cached.geometry;
        let style = &self.style;

        append_value_grid(&mut frame, dataset, geometry, style);
        append_day_grid(&mut frame, dataset, geometry, style);
        append_axes(&mut frame, geometry, style);

        for (serie, projected) in dataset.series.iter().zip(&geometry.series) {
            if projected.points.is_empty() {
                continue;
            }
            // Non-finite sums project off the plot; such series keep their finite dots only.
            if projected.points.iter().all(is_finite_point) {
                frame.push_path(PathPrimitive::filled(
                    projected.fill_polygon.clone(),
                    serie.color.with_alpha(style.fill_alpha),
                ));
                frame.push_path(PathPrimitive::stroked(
                    projected.points.clone(),
                    serie.color,
                    style.line_width,
                ));
            }
            for point in projected.points.iter().filter(|point| is_finite_point(point)) {
                frame.push_circle(CirclePrimitive::new(
                    point.x,
                    point.y,
                    style.point_radius,
                    serie.color,
                ));
            }
        }

        Ok(frame)
    }
}

fn append_value_grid(
    frame: &mut RenderFrame,
    dataset: &DenseDayDataset,
    geometry: &LineChartGeometry,
    style: &LineChartStyle,
) {
    let plot = geometry.plot;
    let divisions = style.y_grid_divisions;
    let grid_step = dataset.max_sum / f64::from(divisions);
    for i in 0..=divisions {
        let value = grid_step * f64::from(i);
        let y = geometry.y_for_value(value);
        frame.push_line(LinePrimitive::new(
            plot.left,
            y,
            plot.right,
            y,
            style.grid_width,
            style.grid_color,
        ));
        frame.push_text(TextPrimitive::new(
            format_value_label(value),
            plot.left - style.y_label_offset_x,
            y + style.y_label_offset_y,
            style.y_label_font_size_px,
            style.y_label_color,
            TextHAlign::Right,
        ));
    }
}

fn append_day_grid(
    frame: &mut RenderFrame,
    dataset: &DenseDayDataset,
    geometry: &LineChartGeometry,
    style: &LineChartStyle,
) {
    let (Some(serie), Some(projected)) = (dataset.series.first(), geometry.series.first()) else {
        return;
    };
    let plot = geometry.plot;
    let stride = day_label_stride(serie.points.len(), style.max_x_labels);
    for (point, screen) in serie
        .points
        .iter()
        .zip(&projected.points)
        .step_by(stride)
    {
        frame.push_line(LinePrimitive::new(
            screen.x,
            plot.bottom,
            screen.x,
            plot.top,
            style.grid_width,
            style.grid_color,
        ));
        frame.push_text(TextPrimitive::new(
            format!("{} {}", style.day_label_prefix, point.day),
            screen.x,
            plot.bottom + style.x_label_offset_y,
            style.x_label_font_size_px,
            style.x_label_color,
            TextHAlign::Center,
        ));
    }
}

fn append_axes(frame: &mut RenderFrame, geometry: &LineChartGeometry, style: &LineChartStyle) {
    let plot = geometry.plot;
    frame.push_line(LinePrimitive::new(
        plot.left,
        plot.bottom,
        plot.right,
        plot.bottom,
        style.axis_width,
        style.axis_color,
    ));
    frame.push_line(LinePrimitive::new(
        plot.left,
        plot.bottom,
        plot.left,
        plot.top,
        style.axis_width,
        style.axis_color,
    ));
}

fn is_finite_point(point: &ScreenPoint) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Index stride between labelled days: `max(1, n / max(min(max_labels, n - 1), 1))`.
pub(super) fn day_label_stride(point_count: usize, max_labels: usize) -> usize {
    let label_slots = max_labels.min(point_count.saturating_sub(1)).max(1);
    (point_count / label_slots).max(1)
}

fn format_value_label(value: f64) -> String {
    (value.round() as i64).to_string()
}
