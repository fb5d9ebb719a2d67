use serde::{Deserialize, Serialize};

use crate::core::{DenseDayDataset, ScreenPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Fixed plot insets measured from the widget edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self {
            left: 70.0,
            right: 36.0,
            top: 44.0,
            bottom: 54.0,
        }
    }
}

impl PlotInsets {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidStyle(format!(
                    "plot inset `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Plot rectangle in pixel space. `right >= left` and `bottom >= top` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    /// Insets the viewport; a viewport smaller than the insets collapses to a
    /// zero-sized rectangle anchored at the left/top inset.
    #[must_use]
    pub fn inset(viewport: Viewport, insets: PlotInsets) -> Self {
        let left = insets.left;
        let top = insets.top;
        Self {
            left,
            top,
            right: (f64::from(viewport.width) - insets.right).max(left),
            bottom: (f64::from(viewport.height) - insets.bottom).max(top),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Screen geometry of one dense series.
///
/// `fill_polygon` runs baseline-start, every line point, baseline-end and is
/// closed by the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGeometry {
    pub points: Vec<ScreenPoint>,
    pub fill_polygon: Vec<ScreenPoint>,
}

/// Projected geometry of the whole line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartGeometry {
    pub plot: PlotRect,
    pub step_x: f64,
    pub step_y: f64,
    pub series: Vec<SeriesGeometry>,
}

impl LineChartGeometry {
    /// Pixel row of a value on the y axis.
    #[must_use]
    pub fn y_for_value(&self, value: f64) -> f64 {
        self.plot.bottom - value * self.step_y
    }
}

/// Projects every dense series into plot space.
///
/// `x = left + (day - min_day) * step_x`, `y = bottom - sum * step_y`.
/// Both step denominators are floored so single-day and all-zero datasets
/// still produce finite coordinates.
#[must_use]
pub fn project_line_chart(
    dataset: &DenseDayDataset,
    viewport: Viewport,
    insets: PlotInsets,
) -> LineChartGeometry {
    let plot = PlotRect::inset(viewport, insets);
    let step_x = plot.width() / dataset.day_span() as f64;
    let max_sum = if dataset.max_sum > 0.0 {
        dataset.max_sum
    } else {
        1.0
    };
    let step_y = plot.height() / max_sum;

    let series = dataset
        .series
        .iter()
        .map(|serie| {
            let points: Vec<ScreenPoint> = serie
                .points
                .iter()
                .map(|point| {
                    ScreenPoint::new(
                        plot.left + (point.day - dataset.min_day) as f64 * step_x,
                        plot.bottom - point.sum * step_y,
                    )
                })
                .collect();

            let mut fill_polygon = Vec::with_capacity(points.len() + 2);
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                fill_polygon.push(ScreenPoint::new(first.x, plot.bottom));
                fill_polygon.extend(points.iter().copied());
                fill_polygon.push(ScreenPoint::new(last.x, plot.bottom));
            }

            SeriesGeometry {
                points,
                fill_polygon,
            }
        })
        .collect();

    LineChartGeometry {
        plot,
        step_x,
        step_y,
        series,
    }
}
