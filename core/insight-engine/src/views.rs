//! FILENAME: core/insight-engine/src/views.rs
//! Chart-ready views over canonical records.
//!
//! - `platform_totals`: answer -> summed count, "None" answers excluded
//! - `segment_data`: segment description -> answer -> count for one segment type
//! - `top_segments`: descriptions ranked by their total count
//!
//! Ordered outputs keep first-encounter order for ties.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use survey_engine::CanonicalRecord;

/// Number of segments shown in ranking charts.
pub const DEFAULT_TOP_N: usize = 5;

// ============================================================================
// PLATFORM TOTALS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformTotal {
    pub platform: String,
    pub count: u64,
}

/// Sums counts per answer across all segments, skipping "None" answers.
/// Sorted by count descending; equal counts keep first-encounter order.
pub fn platform_totals(records: &[CanonicalRecord]) -> Vec<PlatformTotal> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut totals: Vec<PlatformTotal> = Vec::new();

    for record in records.iter().filter(|r| !r.is_none) {
        match index.get(record.answer.as_str()) {
            Some(&slot) => {
                let total = &mut totals[slot];
                total.count = total.count.saturating_add(record.count);
            }
            None => {
                index.insert(record.answer.as_str(), totals.len());
                totals.push(PlatformTotal {
                    platform: record.answer.clone(),
                    count: record.count,
                });
            }
        }
    }

    totals.sort_by(|a, b| b.count.cmp(&a.count));
    totals
}

// ============================================================================
// SEGMENT DATA
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCount {
    pub answer: String,
    pub count: u64,
}

/// Answer counts for one segment description (e.g. "Male" within "Gender").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBreakdown {
    pub description: String,
    pub answers: Vec<AnswerCount>,
}

impl SegmentBreakdown {
    fn new(description: &str) -> Self {
        SegmentBreakdown {
            description: description.to_string(),
            answers: Vec::new(),
        }
    }

    /// Stores a count for an answer, replacing any earlier value.
    fn set(&mut self, answer: &str, count: u64) {
        match self.answers.iter_mut().find(|a| a.answer == answer) {
            Some(existing) => existing.count = count,
            None => self.answers.push(AnswerCount {
                answer: answer.to_string(),
                count,
            }),
        }
    }

    pub fn count_for(&self, answer: &str) -> Option<u64> {
        self.answers
            .iter()
            .find(|a| a.answer == answer)
            .map(|a| a.count)
    }

    pub fn total(&self) -> u64 {
        self.answers
            .iter()
            .fold(0u64, |acc, a| acc.saturating_add(a.count))
    }
}

/// All breakdowns of one segment type, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentData {
    pub segment_type: String,
    pub segments: Vec<SegmentBreakdown>,
}

impl SegmentData {
    pub fn get(&self, description: &str) -> Option<&SegmentBreakdown> {
        self.segments.iter().find(|s| s.description == description)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Builds description -> answer -> count for one segment type, skipping
/// "None" answers. A repeated (description, answer) pair overwrites the
/// earlier count; on normalized (merged) input no pair repeats.
pub fn segment_data(records: &[CanonicalRecord], segment_type: &str) -> SegmentData {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut data = SegmentData {
        segment_type: segment_type.to_string(),
        segments: Vec::new(),
    };

    for record in records
        .iter()
        .filter(|r| r.segment_type == segment_type && !r.is_none)
    {
        let description = record.segment_description.as_str();
        let slot = match index.get(description) {
            Some(&slot) => slot,
            None => {
                index.insert(description, data.segments.len());
                data.segments.push(SegmentBreakdown::new(description));
                data.segments.len() - 1
            }
        };
        data.segments[slot].set(&record.answer, record.count);
    }

    data
}

// ============================================================================
// TOP-N RANKING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentTotal {
    pub name: String,
    pub total: u64,
}

/// Ranks segment descriptions by the sum of their answer counts.
pub fn top_segments(data: &SegmentData, n: usize) -> Vec<SegmentTotal> {
    let totals = data
        .segments
        .iter()
        .map(|segment| SegmentTotal {
            name: segment.description.clone(),
            total: segment.total(),
        })
        .collect();
    rank_totals(totals, n)
}

/// Sorts descending (stable on ties) and keeps the first `n`.
pub fn rank_totals(mut totals: Vec<SegmentTotal>, n: usize) -> Vec<SegmentTotal> {
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals.truncate(n);
    totals
}
