use serde::{Deserialize, Serialize};

use crate::core::{PlotInsets, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Line chart layout and paint constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartStyle {
    pub insets: PlotInsets,
    /// Horizontal grid lines are drawn at `max_sum * i / y_grid_divisions`.
    pub y_grid_divisions: u32,
    pub max_x_labels: usize,
    pub line_width: f64,
    pub grid_width: f64,
    pub axis_width: f64,
    pub point_radius: f64,
    pub fill_alpha: f64,
    pub grid_color: Color,
    pub axis_color: Color,
    pub x_label_color: Color,
    pub x_label_font_size_px: f64,
    pub x_label_offset_y: f64,
    pub y_label_color: Color,
    pub y_label_font_size_px: f64,
    pub y_label_offset_x: f64,
    pub y_label_offset_y: f64,
    pub day_label_prefix: String,
}

impl Default for LineChartStyle {
    fn default() -> Self {
        Self {
            insets: PlotInsets::default(),
            y_grid_divisions: 4,
            max_x_labels: 6,
            line_width: 7.0,
            grid_width: 2.0,
            axis_width: 3.0,
            point_radius: 9.0,
            fill_alpha: 40.0 / 255.0,
            grid_color: Color::rgb8(0xee, 0xee, 0xee),
            axis_color: Color::rgb8(0xbb, 0xbb, 0xbb),
            x_label_color: Color::rgb8(0x88, 0x88, 0x88),
            x_label_font_size_px: 28.0,
            x_label_offset_y: 28.0,
            y_label_color: Color::rgb8(0xbb, 0xbb, 0xbb),
            y_label_font_size_px: 24.0,
            y_label_offset_x: 10.0,
            y_label_offset_y: 10.0,
            day_label_prefix: "Day".to_owned(),
        }
    }
}

impl LineChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        self.insets.validate()?;
        if self.y_grid_divisions == 0 {
            return Err(ChartError::InvalidStyle(
                "line style `y_grid_divisions` must be > 0".to_owned(),
            ));
        }
        if self.max_x_labels == 0 {
            return Err(ChartError::InvalidStyle(
                "line style `max_x_labels` must be > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("line_width", self.line_width),
            ("grid_width", self.grid_width),
            ("axis_width", self.axis_width),
            ("point_radius", self.point_radius),
            ("x_label_font_size_px", self.x_label_font_size_px),
            ("y_label_font_size_px", self.y_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidStyle(format!(
                    "line style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ChartError::InvalidStyle(
                "line style `fill_alpha` must be in [0, 1]".to_owned(),
            ));
        }
        for value in [
            self.x_label_offset_y,
            self.y_label_offset_x,
            self.y_label_offset_y,
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidStyle(
                    "line style label offsets must be finite".to_owned(),
                ));
            }
        }
        for color in [
            self.grid_color,
            self.axis_color,
            self.x_label_color,
            self.y_label_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

/// Line chart bootstrap configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub style: LineChartStyle,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: LineChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: LineChartStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::LineChartStyle;
    use crate::core::PlotInsets;

    #[test]
    fn default_style_is_valid() {
        LineChartStyle::default().validate().expect("valid default");
    }

    #[test]
    fn negative_inset_is_rejected() {
        let style = LineChartStyle {
            insets: PlotInsets {
                left: -1.0,
                ..PlotInsets::default()
            },
            ..LineChartStyle::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn zero_grid_divisions_are_rejected() {
        let style = LineChartStyle {
            y_grid_divisions: 0,
            ..LineChartStyle::default()
        };
        assert!(style.validate().is_err());
    }
}
