use serde::{Deserialize, Serialize};

use crate::core::CategoryTotals;
use crate::render::Color;

/// Angle of the first wedge's leading edge (12 o'clock, y axis pointing down).
pub const PIE_START_ANGLE_DEG: f64 = -90.0;

/// One angular slice of the pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub category: String,
    pub value: f64,
    pub percent: f64,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub color: Color,
}

impl Wedge {
    #[must_use]
    pub fn end_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg
    }

    #[must_use]
    pub fn mid_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg / 2.0
    }
}

/// Wedge list plus the total it was normalized against.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WedgeLayout {
    pub wedges: Vec<Wedge>,
    pub total_value: f64,
}

impl WedgeLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }

    #[must_use]
    pub fn total_sweep_deg(&self) -> f64 {
        self.wedges.iter().map(|wedge| wedge.sweep_angle_deg).sum()
    }
}

/// Lays out one wedge per category, in category first-seen order.
///
/// Wedges start at 12 o'clock and each begins where the previous one ended.
/// A zero total collapses every percent and sweep to zero. Colors cycle
/// through `palette`; an empty palette yields black wedges.
#[must_use]
pub fn build_wedge_layout(totals: &CategoryTotals, palette: &[Color]) -> WedgeLayout {
    let total_value = totals.total();
    let mut wedges = Vec::with_capacity(totals.len());
    let mut start_angle_deg = PIE_START_ANGLE_DEG;

    for (index, (category, value)) in totals.iter().enumerate() {
        let percent = if total_value == 0.0 {
            0.0
        } else {
            value / total_value
        };
        let sweep_angle_deg = percent * 360.0;
        let color = if palette.is_empty() {
            Color::rgb(0.0, 0.0, 0.0)
        } else {
            palette[index % palette.len()]
        };
        wedges.push(Wedge {
            category: category.to_owned(),
            value,
            percent,
            start_angle_deg,
            sweep_angle_deg,
            color,
        });
        start_angle_deg += sweep_angle_deg;
    }

    WedgeLayout {
        wedges,
        total_value,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{PIE_START_ANGLE_DEG, build_wedge_layout};
    use crate::core::{CategoryTotals, Record};
    use crate::render::Color;

    const PALETTE: [Color; 2] = [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)];

    #[test]
    fn palette_cycles_by_wedge_index() {
        let records = vec![
            Record::new("a", 1.0, 0),
            Record::new("b", 1.0, 0),
            Record::new("c", 1.0, 0),
        ];
        let layout = build_wedge_layout(&CategoryTotals::from_records(&records), &PALETTE);
        assert_eq!(layout.wedges[0].color, PALETTE[0]);
        assert_eq!(layout.wedges[1].color, PALETTE[1]);
        assert_eq!(layout.wedges[2].color, PALETTE[0]);
    }

    #[test]
    fn zero_total_collapses_sweeps_but_keeps_wedges() {
        let records = vec![Record::new("a", 0.0, 0), Record::new("b", 0.0, 0)];
        let layout = build_wedge_layout(&CategoryTotals::from_records(&records), &PALETTE);

        assert_eq!(layout.wedges.len(), 2);
        for wedge in &layout.wedges {
            assert_eq!(wedge.percent, 0.0);
            assert_eq!(wedge.sweep_angle_deg, 0.0);
            assert_eq!(wedge.start_angle_deg, PIE_START_ANGLE_DEG);
        }
    }

    #[test]
    fn wedges_are_contiguous() {
        let records = vec![
            Record::new("a", 3.0, 0),
            Record::new("b", 5.0, 0),
            Record::new("c", 2.0, 0),
        ];
        let layout = build_wedge_layout(&CategoryTotals::from_records(&records), &PALETTE);
        for pair in layout.wedges.windows(2) {
            assert_abs_diff_eq!(pair[0].end_angle_deg(), pair[1].start_angle_deg);
        }
        assert_abs_diff_eq!(layout.total_sweep_deg(), 360.0, epsilon = 1e-9);
        assert_abs_diff_eq!(layout.wedges[2].end_angle_deg(), 270.0, epsilon = 1e-9);
    }
}
