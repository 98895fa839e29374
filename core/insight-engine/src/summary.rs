//! FILENAME: core/insight-engine/src/summary.rs
//! PURPOSE: Labels and option lists derived from the working record set.
//! CONTEXT: The question label is resolved through a static translation table.
//! Candidate fields of the first record are tried in order and the first
//! normalized match wins; otherwise a fixed template is used.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use survey_engine::{CanonicalRecord, FilterState, RecordField};

/// Fields of the first record consulted for a known question, in order.
pub const QUESTION_CANDIDATES: [RecordField; 3] = [
    RecordField::Question,
    RecordField::SegmentType,
    RecordField::SegmentDescription,
];

const BUILTIN_TRANSLATIONS: [(&str, &str); 1] = [(
    "What social platform has influenced your online shopping most?",
    "Qual plataforma social mais influenciou suas compras online?",
)];

const FALLBACK_PREFIX: &str = "Análise de preferências de plataformas sociais por";

// ============================================================================
// QUESTION LOOKUP
// ============================================================================

/// Raw question text (trimmed, lower-cased) -> display label.
#[derive(Debug, Clone)]
pub struct QuestionLookup {
    translations: FxHashMap<String, String>,
}

impl Default for QuestionLookup {
    fn default() -> Self {
        let mut lookup = QuestionLookup::empty();
        for (question, label) in BUILTIN_TRANSLATIONS {
            lookup.insert(question, label);
        }
        lookup
    }
}

impl QuestionLookup {
    pub fn empty() -> Self {
        QuestionLookup {
            translations: FxHashMap::default(),
        }
    }

    /// Built-in table plus extra entries (e.g. from configuration).
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        let mut lookup = QuestionLookup::default();
        for (question, label) in entries {
            lookup.insert(question, label.clone());
        }
        lookup
    }

    pub fn insert(&mut self, question: &str, label: impl Into<String>) {
        self.translations
            .insert(normalize_question(question), label.into());
    }

    pub fn translate(&self, raw: &str) -> Option<&str> {
        self.translations
            .get(&normalize_question(raw))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

pub fn normalize_question(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ============================================================================
// QUESTION SUMMARY
// ============================================================================

/// Display label for the dataset's question. Empty for an empty collection.
pub fn question_summary(records: &[CanonicalRecord], lookup: &QuestionLookup) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    QUESTION_CANDIDATES
        .iter()
        .filter_map(|field| first.text(*field))
        .find_map(|text| lookup.translate(text))
        .map(str::to_string)
        .unwrap_or_else(|| fallback_summary(&first.segment_type))
}

pub fn fallback_summary(segment_type: &str) -> String {
    format!("{} {}", FALLBACK_PREFIX, segment_type.to_lowercase())
}

// ============================================================================
// OPTION LISTS
// ============================================================================

/// Distinct values of a field, sorted lexicographically. Numeric fields are
/// compared as their display strings, so counts sort "10" before "9".
pub fn unique_values(records: &[CanonicalRecord], field: RecordField) -> Vec<String> {
    records
        .iter()
        .map(|record| record.display_value(field))
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Choices for the three filter selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub segment_types: Vec<String>,
    /// Only populated once a segment type is selected.
    pub segment_descriptions: Vec<String>,
    pub answers: Vec<String>,
}

pub fn filter_options(records: &[CanonicalRecord], state: &FilterState) -> FilterOptions {
    let segment_descriptions = if state.segment_type.is_empty() {
        Vec::new()
    } else {
        records
            .iter()
            .filter(|r| r.segment_type == state.segment_type)
            .map(|r| r.segment_description.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    };

    FilterOptions {
        segment_types: unique_values(records, RecordField::SegmentType),
        segment_descriptions,
        answers: unique_values(records, RecordField::Answer),
    }
}
