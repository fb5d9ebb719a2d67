use std::collections::BTreeMap;

use crate::core::{DayPoint, Record, SeriesInput};
use crate::render::Color;

/// Buckets records into per-day sums for each requested category.
///
/// One series is produced per entry of `categories`, in that order, even when
/// a category has no records. Records of unlisted categories are skipped.
#[must_use]
pub fn daily_series(records: &[Record], categories: &[(&str, Color)]) -> Vec<SeriesInput> {
    categories
        .iter()
        .map(|(category, color)| {
            let mut by_day: BTreeMap<i64, f64> = BTreeMap::new();
            for record in records.iter().filter(|record| record.category == *category) {
                *by_day.entry(record.day()).or_insert(0.0) += record.amount;
            }
            let points = by_day
                .into_iter()
                .map(|(day, sum)| DayPoint::new(day, sum))
                .collect();
            SeriesInput::new(*category, *color, points)
        })
        .collect()
}
