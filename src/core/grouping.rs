use indexmap::IndexMap;

use crate::core::Record;

/// Per-category amount totals keyed in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTotals {
    totals: IndexMap<String, f64>,
}

impl CategoryTotals {
    /// Groups `records` by category in a single pass.
    ///
    /// Iteration order is the order in which each category first appears in
    /// the input, independent of amounts.
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        let mut totals: IndexMap<String, f64> = IndexMap::new();
        for record in records {
            *totals.entry(record.category.clone()).or_insert(0.0) += record.amount;
        }
        Self { totals }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<f64> {
        self.totals.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals
            .iter()
            .map(|(category, value)| (category.as_str(), *value))
    }
}
