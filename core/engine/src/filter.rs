//! FILENAME: core/engine/src/filter.rs
//! PURPOSE: Equality filtering over canonical records.
//! CONTEXT: FilterState is owned by the presentation layer and handed in on
//! every recomputation. `filter` is the dashboard-wide exact match; `search`
//! is the data table's case-insensitive substring match over the same fields.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::record::{CanonicalRecord, RecordField};

/// Selection widgets send this sentinel for "no constraint".
pub const ALL_OPTION: &str = "all";

/// Fields a FilterState can constrain, in evaluation order.
pub const FILTER_FIELDS: [RecordField; 3] = [
    RecordField::SegmentType,
    RecordField::SegmentDescription,
    RecordField::Answer,
];

// ============================================================================
// FILTER STATE
// ============================================================================

/// Three optional predicates; an empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub segment_type: String,
    pub segment_description: String,
    pub answer: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates().next().is_none()
    }

    pub fn get(&self, field: RecordField) -> Result<&str, EngineError> {
        match field {
            RecordField::SegmentType => Ok(&self.segment_type),
            RecordField::SegmentDescription => Ok(&self.segment_description),
            RecordField::Answer => Ok(&self.answer),
            other => Err(EngineError::NotFilterable(other)),
        }
    }

    /// Sets one predicate. Changing the segment type invalidates the
    /// segment description, which only makes sense within a type.
    pub fn set(&mut self, field: RecordField, value: &str) -> Result<(), EngineError> {
        let value = if value == ALL_OPTION { "" } else { value };

        match field {
            RecordField::SegmentType => {
                self.segment_type = value.to_string();
                self.segment_description.clear();
            }
            RecordField::SegmentDescription => self.segment_description = value.to_string(),
            RecordField::Answer => self.answer = value.to_string(),
            other => return Err(EngineError::NotFilterable(other)),
        }
        Ok(())
    }

    /// Builder form of `set`, handy when a state is assembled in one go.
    pub fn with(mut self, field: RecordField, value: &str) -> Result<Self, EngineError> {
        self.set(field, value)?;
        Ok(self)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Non-empty predicates as (field, value) pairs.
    pub fn predicates(&self) -> impl Iterator<Item = (RecordField, &str)> {
        FILTER_FIELDS.into_iter().filter_map(move |field| {
            self.get(field)
                .ok()
                .filter(|value| !value.is_empty())
                .map(|value| (field, value))
        })
    }

    /// Exact, case-sensitive match on every set predicate.
    pub fn matches(&self, record: &CanonicalRecord) -> bool {
        self.predicates()
            .all(|(field, value)| record.text(field) == Some(value))
    }

    /// Case-insensitive substring match on every set predicate.
    pub fn matches_search(&self, record: &CanonicalRecord) -> bool {
        self.predicates().all(|(field, value)| {
            record
                .text(field)
                .map(|text| text.to_lowercase().contains(&value.to_lowercase()))
                .unwrap_or(false)
        })
    }
}

// ============================================================================
// FILTER OPERATIONS
// ============================================================================

/// Returns the records passing every predicate, in input order.
/// With no predicates set this is a copy of the input.
pub fn filter(records: &[CanonicalRecord], state: &FilterState) -> Vec<CanonicalRecord> {
    records
        .iter()
        .filter(|record| state.matches(record))
        .cloned()
        .collect()
}

pub fn search(records: &[CanonicalRecord], state: &FilterState) -> Vec<CanonicalRecord> {
    records
        .iter()
        .filter(|record| state.matches_search(record))
        .cloned()
        .collect()
}
