use serde::{Deserialize, Serialize};

use crate::core::{DenseDayDataset, LineChartGeometry, Viewport, Wedge};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{CenterText, LineChart, PieChart};

/// Serializable pie state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartSnapshot {
    pub viewport: Viewport,
    pub wedges: Vec<Wedge>,
    pub total_amount: f64,
    pub selected_category: Option<String>,
    pub center_text: CenterText,
}

/// Serializable line chart state, including the geometry it currently draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartSnapshot {
    pub viewport: Viewport,
    pub dataset: Option<DenseDayDataset>,
    pub geometry: Option<LineChartGeometry>,
}

impl PieChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidPayload(format!("failed to serialize pie snapshot: {e}")))
    }
}

impl LineChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidPayload(format!("failed to serialize line snapshot: {e}")))
    }
}

impl<R: Renderer> PieChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> PieChartSnapshot {
        PieChartSnapshot {
            viewport: self.viewport,
            wedges: self.layout.wedges.clone(),
            total_amount: self.layout.total_value,
            selected_category: self.selected_category.clone(),
            center_text: self.center_text.clone(),
        }
    }
}

impl<R: Renderer> LineChart<R> {
    /// Captures the current state; refreshes stale geometry first.
    pub fn snapshot(&mut self) -> LineChartSnapshot {
        let geometry = self.geometry().cloned();
        LineChartSnapshot {
            viewport: self.viewport,
            dataset: self.dataset.clone(),
            geometry,
        }
    }
}
