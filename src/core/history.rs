use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::features::unit_converter::{Category, DISPLAY_PRECISION};

/// Maximum number of conversions kept in history
pub const MAX_HISTORY_SIZE: usize = 5;

/// One successful conversion, rendered for display when created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: String,
    pub input_value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub category: Category,
    pub result_value: f64,
    pub display: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn new(
        input_value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        result_value: f64,
        category: Category,
    ) -> Self {
        let from_unit = from_unit.into();
        let to_unit = to_unit.into();
        let display = format!(
            "{} {} = {:.*} {} ({})",
            input_value, from_unit, DISPLAY_PRECISION, result_value, to_unit, category
        );

        Self {
            id: Uuid::new_v4().to_string(),
            input_value,
            from_unit,
            to_unit,
            category,
            result_value,
            display,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Bounded conversion history, oldest first
///
/// Never holds more than `MAX_HISTORY_SIZE` records; appending to a full
/// history evicts the oldest one.
#[derive(Debug, Clone, Default)]
pub struct ConversionHistory {
    records: VecDeque<ConversionRecord>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(MAX_HISTORY_SIZE + 1),
        }
    }

    /// Format and append a conversion, returning the stored record
    pub fn record(
        &mut self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        result: f64,
        category: Category,
    ) -> &ConversionRecord {
        self.push(ConversionRecord::new(value, from_unit, to_unit, result, category))
    }

    /// Append an already built record
    pub fn push(&mut self, record: ConversionRecord) -> &ConversionRecord {
        tracing::debug!("[ConversionHistory] Added {}: {}", record.id, record.display);
        self.records.push_back(record);

        if self.records.len() > MAX_HISTORY_SIZE {
            if let Some(evicted) = self.records.pop_front() {
                tracing::debug!("[ConversionHistory] Evicted oldest: {}", evicted.display);
            }
        }

        &self.records[self.records.len() - 1]
    }

    /// Display strings, most recent last
    pub fn entries(&self) -> Vec<String> {
        self.records.iter().map(|r| r.display.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.records.iter()
    }

    /// Get a record by index (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&ConversionRecord> {
        self.records.get(index)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&ConversionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record; a no-op when already empty
    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            tracing::debug!("[ConversionHistory] Cleared {} records", self.records.len());
        }
        self.records.clear();
    }
}
