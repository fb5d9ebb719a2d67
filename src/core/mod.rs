pub mod bucketing;
pub mod day_series;
pub mod grouping;
pub mod line_projection;
pub mod primitives;
pub mod record;
pub mod ring;
pub mod types;
pub mod wedge;

pub use bucketing::daily_series;
pub use day_series::{DayPoint, DaySeries, DenseDayDataset, SeriesInput, densify_series};
pub use grouping::CategoryTotals;
pub use line_projection::{
    LineChartGeometry, PlotInsets, PlotRect, SeriesGeometry, project_line_chart,
};
pub use primitives::{SECONDS_PER_DAY, day_index};
pub use record::{JsonRecordSource, Record, RecordSource};
pub use ring::{RingGeometry, hit_test_wedges, wedge_contains_angle};
pub use types::{ScreenPoint, Viewport};
pub use wedge::{PIE_START_ANGLE_DEG, Wedge, WedgeLayout, build_wedge_layout};
