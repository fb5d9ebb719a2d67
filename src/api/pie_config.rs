use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PIE_PALETTE};

/// Ring pie geometry and paint constants.
///
/// Ratios are relative to `min(width, height)` of the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartStyle {
    pub radius_ratio: f64,
    pub ring_width_ratio: f64,
    /// Stroke multiplier for the selected wedge. Visual only; hit testing
    /// always uses the un-widened band.
    pub selected_stroke_factor: f64,
    /// Degrees trimmed from the end of every arc to leave a visible gap.
    pub arc_gap_deg: f64,
    /// Wedges narrower than this get no percentage label.
    pub label_min_sweep_deg: f64,
    pub label_font_size_px: f64,
    /// Labels are lowered by `label_font_size_px / label_baseline_divisor`.
    pub label_baseline_divisor: f64,
    pub label_color: Color,
    pub separator_width: f64,
    pub separator_color: Color,
    pub center_text_size_ratio: f64,
    pub center_text_offset_y: f64,
    pub center_text_color: Color,
    pub center_sub_text_size_ratio: f64,
    pub center_sub_text_offset_y: f64,
    pub center_sub_text_color: Color,
    pub palette: Vec<Color>,
}

impl Default for PieChartStyle {
    fn default() -> Self {
        Self {
            radius_ratio: 0.39,
            ring_width_ratio: 0.18,
            selected_stroke_factor: 1.14,
            arc_gap_deg: 2.0,
            label_min_sweep_deg: 15.0,
            label_font_size_px: 40.0,
            label_baseline_divisor: 2.6,
            label_color: Color::rgb(0.0, 0.0, 0.0),
            separator_width: 8.0,
            separator_color: Color::rgb(1.0, 1.0, 1.0),
            center_text_size_ratio: 0.12,
            center_text_offset_y: -10.0,
            center_text_color: Color::rgb8(0x44, 0x44, 0x44),
            center_sub_text_size_ratio: 0.065,
            center_sub_text_offset_y: 40.0,
            center_sub_text_color: Color::rgb8(0xbb, 0xbb, 0xbb),
            palette: PIE_PALETTE.to_vec(),
        }
    }
}

impl PieChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("radius_ratio", self.radius_ratio),
            ("ring_width_ratio", self.ring_width_ratio),
            ("selected_stroke_factor", self.selected_stroke_factor),
            ("label_font_size_px", self.label_font_size_px),
            ("label_baseline_divisor", self.label_baseline_divisor),
            ("separator_width", self.separator_width),
            ("center_text_size_ratio", self.center_text_size_ratio),
            ("center_sub_text_size_ratio", self.center_sub_text_size_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidStyle(format!(
                    "pie style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("arc_gap_deg", self.arc_gap_deg),
            ("label_min_sweep_deg", self.label_min_sweep_deg),
        ] {
            if !value.is_finite() || !(0.0..=360.0).contains(&value) {
                return Err(ChartError::InvalidStyle(format!(
                    "pie style `{name}` must be finite and in [0, 360]"
                )));
            }
        }
        if !self.center_text_offset_y.is_finite() || !self.center_sub_text_offset_y.is_finite() {
            return Err(ChartError::InvalidStyle(
                "pie center text offsets must be finite".to_owned(),
            ));
        }
        if self.palette.is_empty() {
            return Err(ChartError::InvalidStyle(
                "pie palette must not be empty".to_owned(),
            ));
        }
        for color in self
            .palette
            .iter()
            .chain([
                &self.label_color,
                &self.separator_color,
                &self.center_text_color,
                &self.center_sub_text_color,
            ])
        {
            color.validate()?;
        }
        Ok(())
    }
}

/// Pie chart bootstrap configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub style: PieChartStyle,
}

impl PieChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: PieChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: PieChartStyle) -> Self {
        self.style = style;
        self
    }
}
