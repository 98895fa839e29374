//! FILENAME: core/engine/src/sort.rs
//! PURPOSE: Type-aware, stable ordering of record collections.
//! CONTEXT: Count and percentage compare numerically, text fields compare
//! lexicographically (case-sensitive). Equal keys keep their input order in
//! both directions, so toggling twice restores the original ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::record::{CanonicalRecord, RecordField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column of the data table. Fresh tables sort by count, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub field: RecordField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            field: RecordField::Count,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Header click: the same column flips direction, a new column starts descending.
    pub fn toggle(&mut self, field: RecordField) {
        if self.field == field {
            self.direction = self.direction.flip();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }

    pub fn apply(&self, records: &[CanonicalRecord]) -> Vec<CanonicalRecord> {
        sort(records, self.field, self.direction)
    }
}

/// Ascending comparison of two records on one field.
pub fn compare_by(a: &CanonicalRecord, b: &CanonicalRecord, field: RecordField) -> Ordering {
    match field {
        RecordField::Count => a.count.cmp(&b.count),
        RecordField::Percentage => a.percentage.total_cmp(&b.percentage),
        text_field => a.text(text_field).cmp(&b.text(text_field)),
    }
}

pub fn sort(records: &[CanonicalRecord], field: RecordField, direction: SortDirection) -> Vec<CanonicalRecord> {
    let mut sorted = records.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| direction.apply(compare_by(a, b, field)));
    sorted
}

/// Sorts by a field given by name, failing on names that are not record fields.
pub fn sort_by_name(
    records: &[CanonicalRecord],
    field: &str,
    direction: SortDirection,
) -> Result<Vec<CanonicalRecord>, EngineError> {
    let field: RecordField = field.parse()?;
    Ok(sort(records, field, direction))
}
