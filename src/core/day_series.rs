use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Summed amount for one day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayPoint {
    pub day: i64,
    pub sum: f64,
}

impl DayPoint {
    #[must_use]
    pub const fn new(day: i64, sum: f64) -> Self {
        Self { day, sum }
    }
}

/// Pre-aggregated per-category input to the line chart.
///
/// `points` may be sparse and unordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInput {
    pub category: String,
    pub color: Color,
    pub points: Vec<DayPoint>,
}

impl SeriesInput {
    #[must_use]
    pub fn new(category: impl Into<String>, color: Color, points: Vec<DayPoint>) -> Self {
        Self {
            category: category.into(),
            color,
            points,
        }
    }
}

/// Gap-free series covering the dataset's whole day domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySeries {
    pub category: String,
    pub color: Color,
    pub points: Vec<DayPoint>,
}

impl DaySeries {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.points.iter().map(|point| point.sum).sum()
    }
}

/// All dense series plus the shared axis domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseDayDataset {
    pub series: Vec<DaySeries>,
    pub min_day: i64,
    pub max_day: i64,
    /// Largest finite dense sum, floored to 1 when not positive.
    pub max_sum: f64,
}

impl DenseDayDataset {
    #[must_use]
    pub fn day_count(&self) -> usize {
        usize::try_from(self.max_day - self.min_day + 1).unwrap_or(0)
    }

    /// Divisor for the x step; never below 1.
    #[must_use]
    pub fn day_span(&self) -> i64 {
        (self.max_day - self.min_day).max(1)
    }
}

/// Densifies every series onto the combined `[min_day, max_day]` domain.
///
/// Missing days become zero-valued points and duplicate days within one
/// series are summed. Returns `None` when no series carries any point.
#[must_use]
pub fn densify_series(inputs: &[SeriesInput]) -> Option<DenseDayDataset> {
    let all_points = || inputs.iter().flat_map(|input| input.points.iter());

    let min_day = all_points().map(|point| point.day).min()?;
    let max_day = all_points().map(|point| point.day).max()?;
    let series: Vec<DaySeries> = inputs
        .iter()
        .map(|input| {
            let mut by_day: BTreeMap<i64, f64> = BTreeMap::new();
            for point in &input.points {
                *by_day.entry(point.day).or_insert(0.0) += point.sum;
            }
            let points = (min_day..=max_day)
                .map(|day| DayPoint::new(day, by_day.get(&day).copied().unwrap_or(0.0)))
                .collect();
            DaySeries {
                category: input.category.clone(),
                color: input.color,
                points,
            }
        })
        .collect();

    // Taken after duplicate days are merged so every dense sum fits the axis.
    let max_sum = series
        .iter()
        .flat_map(|serie| serie.points.iter())
        .filter(|point| point.sum.is_finite())
        .map(|point| OrderedFloat(point.sum))
        .max()
        .map(|max| max.0)
        .filter(|max| *max > 0.0)
        .unwrap_or(1.0);

    Some(DenseDayDataset {
        series,
        min_day,
        max_day,
        max_sum,
    })
}
