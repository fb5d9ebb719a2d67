use serde::{Deserialize, Serialize};

use crate::core::primitives::normalize_degrees;
use crate::core::{ScreenPoint, Viewport, Wedge};

/// Ring placement for one viewport.
///
/// `radius` is the stroke centre-line; the band spans `ring_width / 2` on
/// each side of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub ring_width: f64,
}

impl RingGeometry {
    #[must_use]
    pub fn for_viewport(viewport: Viewport, radius_ratio: f64, ring_width_ratio: f64) -> Self {
        let (center_x, center_y) = viewport.center();
        let min_dim = viewport.min_dimension();
        Self {
            center_x,
            center_y,
            radius: min_dim * radius_ratio,
            ring_width: min_dim * ring_width_ratio,
        }
    }

    #[must_use]
    pub fn inner_radius(self) -> f64 {
        self.radius - self.ring_width / 2.0
    }

    #[must_use]
    pub fn outer_radius(self) -> f64 {
        self.radius + self.ring_width / 2.0
    }

    /// Inclusive on both edges.
    #[must_use]
    pub fn band_contains_distance(self, distance: f64) -> bool {
        distance >= self.inner_radius() && distance <= self.outer_radius()
    }

    #[must_use]
    pub fn distance_from_center(self, x: f64, y: f64) -> f64 {
        (x - self.center_x).hypot(y - self.center_y)
    }

    /// Pointer angle in `[0, 360)`, clockwise from 3 o'clock.
    #[must_use]
    pub fn angle_of(self, x: f64, y: f64) -> f64 {
        normalize_degrees((y - self.center_y).atan2(x - self.center_x).to_degrees())
    }

    #[must_use]
    pub fn point_at(self, angle_deg: f64, radius: f64) -> ScreenPoint {
        let angle = angle_deg.to_radians();
        ScreenPoint::new(
            self.center_x + radius * angle.cos(),
            self.center_y + radius * angle.sin(),
        )
    }
}

/// Tests whether `angle_deg` lies inside the wedge's closed angular span.
///
/// Wedge spans run from -90 to 270 while pointer angles are in `[0, 360)`,
/// so containment is measured as the clockwise offset from the wedge start.
#[must_use]
pub fn wedge_contains_angle(wedge: &Wedge, angle_deg: f64) -> bool {
    if wedge.sweep_angle_deg.is_nan() || wedge.sweep_angle_deg <= 0.0 {
        return false;
    }
    if wedge.sweep_angle_deg >= 360.0 {
        return true;
    }
    let offset = normalize_degrees(angle_deg - wedge.start_angle_deg);
    offset <= wedge.sweep_angle_deg
}

/// Maps a pointer position to the first wedge, in list order, under it.
///
/// Pointers in the centre disc or outside the ring band never hit. An angle
/// exactly on a shared boundary resolves to the earlier wedge.
#[must_use]
pub fn hit_test_wedges(wedges: &[Wedge], ring: RingGeometry, x: f64, y: f64) -> Option<usize> {
    if wedges.is_empty() {
        return None;
    }
    let distance = ring.distance_from_center(x, y);
    if !ring.band_contains_distance(distance) {
        return None;
    }
    let angle = ring.angle_of(x, y);
    wedges
        .iter()
        .position(|wedge| wedge_contains_angle(wedge, angle))
}
