use std::io::Read;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, day_index, unix_seconds_to_datetime};
use crate::error::{ChartError, ChartResult};

/// One dated monetary transaction.
///
/// Amounts are not validated: negative or NaN values flow into sums unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub category: String,
    pub amount: f64,
    #[serde(rename = "time", alias = "timestamp_seconds")]
    pub timestamp_seconds: i64,
}

impl Record {
    #[must_use]
    pub fn new(category: impl Into<String>, amount: f64, timestamp_seconds: i64) -> Self {
        Self {
            category: category.into(),
            amount,
            timestamp_seconds,
        }
    }

    #[must_use]
    pub fn from_datetime(category: impl Into<String>, amount: f64, time: DateTime<Utc>) -> Self {
        Self::new(category, amount, datetime_to_unix_seconds(time))
    }

    pub fn occurred_at(&self) -> ChartResult<DateTime<Utc>> {
        unix_seconds_to_datetime(self.timestamp_seconds)
    }

    #[must_use]
    pub fn day(&self) -> i64 {
        day_index(self.timestamp_seconds)
    }
}

/// Upstream collaborator that yields the transaction list.
pub trait RecordSource {
    fn records(&self) -> ChartResult<Vec<Record>>;
}

impl RecordSource for [Record] {
    fn records(&self) -> ChartResult<Vec<Record>> {
        Ok(self.to_vec())
    }
}

impl RecordSource for Vec<Record> {
    fn records(&self) -> ChartResult<Vec<Record>> {
        Ok(self.clone())
    }
}

/// Record source backed by a JSON array payload.
///
/// Each element needs `category`, `amount` and `time` (unix seconds); any
/// other fields are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecordSource {
    records: Vec<Record>,
}

impl JsonRecordSource {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let records = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidPayload(format!("failed to parse record payload json: {e}"))
        })?;
        Ok(Self { records })
    }

    pub fn from_reader(reader: impl Read) -> ChartResult<Self> {
        let records = serde_json::from_reader(reader).map_err(|e| {
            ChartError::InvalidPayload(format!("failed to read record payload json: {e}"))
        })?;
        Ok(Self { records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for JsonRecordSource {
    fn records(&self) -> ChartResult<Vec<Record>> {
        Ok(self.records.clone())
    }
}
