use crate::core::{RingGeometry, Wedge};
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::PieChart;

impl<R: Renderer> PieChart<R> {
    /// Materializes the pie for the current viewport.
    ///
    /// Paint order: arcs, percentage labels, boundary separators, centre text.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        if self.layout.is_empty() {
            return Ok(frame);
        }

        let ring = self.ring_geometry();
        // Non-finite amounts leave wedges without a drawable angle; they stay
        // in the layout but emit nothing.
        let drawable = || {
            self.layout.wedges.iter().filter(|wedge| {
                wedge.start_angle_deg.is_finite() && wedge.sweep_angle_deg.is_finite()
            })
        };
        for wedge in drawable() {
            frame.push_arc(self.wedge_arc(wedge, ring));
        }
        for wedge in drawable() {
            if let Some(label) = self.wedge_label(wedge, ring) {
                frame.push_text(label);
            }
        }
        for wedge in drawable().filter(|wedge| wedge.sweep_angle_deg > 0.0) {
            let inner = ring.point_at(wedge.end_angle_deg(), ring.inner_radius());
            let outer = ring.point_at(wedge.end_angle_deg(), ring.outer_radius());
            frame.push_line(LinePrimitive::new(
                inner.x,
                inner.y,
                outer.x,
                outer.y,
                self.style.separator_width,
                self.style.separator_color,
            ));
        }
        self.append_center_text(&mut frame, ring);

        Ok(frame)
    }

    fn wedge_arc(&self, wedge: &Wedge, ring: RingGeometry) -> ArcPrimitive {
        let is_selected = self.selected_category.as_deref() == Some(wedge.category.as_str());
        let stroke_width = if is_selected {
            ring.ring_width * self.style.selected_stroke_factor
        } else {
            ring.ring_width
        };
        ArcPrimitive {
            center_x: ring.center_x,
            center_y: ring.center_y,
            radius: ring.radius,
            start_angle_deg: wedge.start_angle_deg,
            sweep_angle_deg: (wedge.sweep_angle_deg - self.style.arc_gap_deg).max(0.0),
            stroke_width,
            color: wedge.color,
        }
    }

    fn wedge_label(&self, wedge: &Wedge, ring: RingGeometry) -> Option<TextPrimitive> {
        if wedge.sweep_angle_deg < self.style.label_min_sweep_deg {
            return None;
        }
        let anchor = ring.point_at(wedge.mid_angle_deg(), ring.radius);
        let font_size = self.style.label_font_size_px;
        Some(
            TextPrimitive::new(
                format_percent(wedge.percent),
                anchor.x,
                anchor.y + font_size / self.style.label_baseline_divisor,
                font_size,
                self.style.label_color,
                TextHAlign::Center,
            )
            .bold(),
        )
    }

    fn append_center_text(&self, frame: &mut RenderFrame, ring: RingGeometry) {
        let min_dim = self.viewport.min_dimension();
        let lines = [
            (
                &self.center_text.text,
                self.style.center_text_size_ratio,
                self.style.center_text_offset_y,
                self.style.center_text_color,
            ),
            (
                &self.center_text.sub_text,
                self.style.center_sub_text_size_ratio,
                self.style.center_sub_text_offset_y,
                self.style.center_sub_text_color,
            ),
        ];
        for (text, size_ratio, offset_y, color) in lines {
            if text.trim().is_empty() {
                continue;
            }
            frame.push_text(
                TextPrimitive::new(
                    text.as_str(),
                    ring.center_x,
                    ring.center_y + offset_y,
                    min_dim * size_ratio,
                    color,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
    }
}

fn format_percent(percent: f64) -> String {
    format!("{}%", (percent * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::format_percent;

    #[test]
    fn percent_labels_round_half_up() {
        assert_eq!(format_percent(0.3), "30%");
        assert_eq!(format_percent(0.125), "13%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.004), "0%");
    }
}
