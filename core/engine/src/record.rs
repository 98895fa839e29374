//! FILENAME: core/engine/src/record.rs
//! PURPOSE: Defines the canonical survey record and the field enum used to address it.
//! CONTEXT: A CanonicalRecord is the normalized, deduplicated unit every other
//! module consumes. Records are immutable once produced by the normalizer or
//! the aggregator; filters, sorts and views always build new collections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Normalized answer marking an explicit "no preference" response.
pub const NONE_ANSWER: &str = "none";

// ============================================================================
// RECORD FIELD
// ============================================================================

/// Addressable columns of a CanonicalRecord.
/// The string names match the camelCase keys used by the dashboard frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    Question,
    SegmentType,
    SegmentDescription,
    Answer,
    Count,
    Percentage,
}

impl RecordField {
    pub const ALL: [RecordField; 6] = [
        RecordField::Question,
        RecordField::SegmentType,
        RecordField::SegmentDescription,
        RecordField::Answer,
        RecordField::Count,
        RecordField::Percentage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecordField::Question => "question",
            RecordField::SegmentType => "segmentType",
            RecordField::SegmentDescription => "segmentDescription",
            RecordField::Answer => "answer",
            RecordField::Count => "count",
            RecordField::Percentage => "percentage",
        }
    }

    /// Count and percentage compare numerically; everything else as text.
    pub fn is_numeric(self) -> bool {
        matches!(self, RecordField::Count | RecordField::Percentage)
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| EngineError::UnknownField(s.to_string()))
    }
}

// ============================================================================
// CANONICAL RECORD
// ============================================================================

/// One (segment type, segment description, answer) combination with its
/// respondent count and its share of the collection it was aggregated in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Survey question text (may be empty).
    pub question: String,
    pub segment_type: String,
    pub segment_description: String,
    /// Capitalized answer ("Twitter", "None").
    pub answer: String,
    pub count: u64,
    /// Share of the collection total, in [0, 1].
    pub percentage: f64,
    pub is_none: bool,
}

impl CanonicalRecord {
    /// Builds a record, normalizing the answer and deriving `is_none`.
    /// The percentage starts at 0 until the record goes through `aggregate`.
    pub fn new(
        segment_type: impl Into<String>,
        segment_description: impl Into<String>,
        answer: &str,
        count: u64,
    ) -> Self {
        let answer = capitalize_answer(answer);
        let is_none = is_none_answer(&answer);
        CanonicalRecord {
            question: String::new(),
            segment_type: segment_type.into(),
            segment_description: segment_description.into(),
            answer,
            count,
            percentage: 0.0,
            is_none,
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// "Gender: Male" style identity of the segment this record belongs to.
    pub fn segment_key(&self) -> String {
        format!("{}: {}", self.segment_type, self.segment_description)
    }

    /// Text value of a string field. Returns None for numeric fields.
    pub fn text(&self, field: RecordField) -> Option<&str> {
        match field {
            RecordField::Question => Some(&self.question),
            RecordField::SegmentType => Some(&self.segment_type),
            RecordField::SegmentDescription => Some(&self.segment_description),
            RecordField::Answer => Some(&self.answer),
            RecordField::Count | RecordField::Percentage => None,
        }
    }

    /// String representation of any field, used for option lists and search.
    pub fn display_value(&self, field: RecordField) -> String {
        match field {
            RecordField::Count => self.count.to_string(),
            RecordField::Percentage => self.percentage.to_string(),
            other => self.text(other).unwrap_or_default().to_string(),
        }
    }
}

// ============================================================================
// ANSWER NORMALIZATION
// ============================================================================

/// Upper-cases the first character and lower-cases the rest.
/// "TWITTER" -> "Twitter", "none" -> "None". Surrounding whitespace is dropped.
pub fn capitalize_answer(answer: &str) -> String {
    let mut chars = answer.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn is_none_answer(answer: &str) -> bool {
    answer.to_lowercase() == NONE_ANSWER
}
