//! FILENAME: core/engine/src/row.rs
//! PURPOSE: Loosely-typed input rows and the header mapping used to read them.
//! CONTEXT: Source datasets name their columns differently ("Segment Type",
//! "segmentType", ...). The normalizer never sees a fixed schema: it asks a
//! RawRow for a named field and resolves canonical fields through an ordered
//! list of candidate header names.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use crate::record::RecordField;

// ============================================================================
// RAW ROW
// ============================================================================

/// Read-only access to a parsed row by header name.
pub trait RawRow {
    fn field(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> RawRow for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RawRow for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<R: RawRow + ?Sized> RawRow for &R {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}

// ============================================================================
// COLUMN MAPPING
// ============================================================================

/// Candidate header names for each canonical field, tried in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMapping {
    pub question: Vec<String>,
    pub segment_type: Vec<String>,
    pub segment_description: Vec<String>,
    pub answer: Vec<String>,
    pub count: Vec<String>,
    pub percentage: Vec<String>,
}

fn names(candidates: &[&str]) -> Vec<String> {
    candidates.iter().map(|c| c.to_string()).collect()
}

impl Default for ColumnMapping {
    fn default() -> Self {
        ColumnMapping {
            question: names(&["Question", "question"]),
            segment_type: names(&["Segment Type", "segmentType", "segment_type"]),
            segment_description: names(&[
                "Segment Description",
                "segmentDescription",
                "segment_description",
            ]),
            answer: names(&["Answer", "answer"]),
            count: names(&["Count", "count"]),
            percentage: names(&["Percentage", "percentage"]),
        }
    }
}

impl ColumnMapping {
    pub fn candidates(&self, field: RecordField) -> &[String] {
        match field {
            RecordField::Question => &self.question,
            RecordField::SegmentType => &self.segment_type,
            RecordField::SegmentDescription => &self.segment_description,
            RecordField::Answer => &self.answer,
            RecordField::Count => &self.count,
            RecordField::Percentage => &self.percentage,
        }
    }

    /// Returns the value of the first candidate header present in the row.
    pub fn resolve<'r, R: RawRow + ?Sized>(&self, row: &'r R, field: RecordField) -> Option<&'r str> {
        self.candidates(field)
            .iter()
            .find_map(|name| row.field(name))
    }

    /// Whether the given header row can feed every field the normalizer requires.
    pub fn covers(&self, headers: &[String]) -> bool {
        [RecordField::Answer, RecordField::Count]
            .iter()
            .all(|field| {
                self.candidates(*field)
                    .iter()
                    .any(|name| headers.iter().any(|h| h == name))
            })
    }
}
