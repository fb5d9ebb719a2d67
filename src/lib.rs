//! expense-charts: geometry, rendering and hit-testing for expense charts.
//!
//! Two independent widgets are driven by the same dated transaction records:
//! a ring pie chart grouped by category and a multi-series daily line chart.
//! Both emit backend-agnostic `RenderFrame`s and never touch a UI toolkit.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig, PieChart, PieChartConfig};
pub use error::{ChartError, ChartResult};
