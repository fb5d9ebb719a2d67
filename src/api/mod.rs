//! Host-facing chart facades.
//!
//! Each facade owns its derived geometry and a renderer. Hosts drive it
//! explicitly: feed data, report size changes, forward pointer-down events
//! and ask for frames.

mod engine_snapshot;
mod json_contract;
mod line_chart;
mod line_config;
mod line_render_frame_builder;
mod pie_chart;
mod pie_config;
mod pie_interaction;
mod pie_render_frame_builder;
#[cfg(feature = "cairo-backend")]
mod render_cairo;

pub use engine_snapshot::{LineChartSnapshot, PieChartSnapshot};
pub use json_contract::{
    PIE_SELECTION_JSON_SCHEMA_V1, PieSelectionJsonContractV1, PieSelectionState,
};
pub use line_chart::LineChart;
pub use line_config::{LineChartConfig, LineChartStyle};
pub use pie_chart::{CategoryClickListener, CenterText, PieChart};
pub use pie_config::{PieChartConfig, PieChartStyle};
