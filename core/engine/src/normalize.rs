//! FILENAME: core/engine/src/normalize.rs
//! PURPOSE: Converts raw parsed rows into canonical, deduplicated records.
//! CONTEXT: Malformed rows (missing/invalid/non-positive count, blank answer)
//! are dropped without raising an error. Accepted rows are merged by key and
//! their percentages recomputed; the source percentage column is ignored.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::record::{CanonicalRecord, RecordField};
use crate::row::{ColumnMapping, RawRow};

/// Row accounting for one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeReport {
    pub rows_read: usize,
    /// Rows that passed validation, before merging.
    pub accepted: usize,
    pub dropped: usize,
    /// Accepted rows folded into an earlier record with the same key.
    pub merged: usize,
}

pub fn normalize<R: RawRow>(rows: &[R], mapping: &ColumnMapping) -> Vec<CanonicalRecord> {
    normalize_with_report(rows, mapping).0
}

pub fn normalize_with_report<R: RawRow>(
    rows: &[R],
    mapping: &ColumnMapping,
) -> (Vec<CanonicalRecord>, NormalizeReport) {
    let mut report = NormalizeReport {
        rows_read: rows.len(),
        ..NormalizeReport::default()
    };

    let accepted: Vec<CanonicalRecord> = rows
        .iter()
        .filter_map(|row| normalize_row(row, mapping))
        .collect();

    report.accepted = accepted.len();
    report.dropped = report.rows_read - report.accepted;

    let records = aggregate(&accepted);
    report.merged = report.accepted - records.len();

    debug!(
        "normalize rows={} accepted={} dropped={} merged={} records={}",
        report.rows_read,
        report.accepted,
        report.dropped,
        report.merged,
        records.len()
    );

    (records, report)
}

/// Validates and converts a single row. Returns None for rows to drop.
pub fn normalize_row<R: RawRow + ?Sized>(row: &R, mapping: &ColumnMapping) -> Option<CanonicalRecord> {
    let count = parse_count(mapping.resolve(row, RecordField::Count)?)?;

    let answer = mapping.resolve(row, RecordField::Answer)?.trim();
    if answer.is_empty() {
        return None;
    }

    let text = |field: RecordField| mapping.resolve(row, field).unwrap_or("").trim().to_string();

    Some(
        CanonicalRecord::new(
            text(RecordField::SegmentType),
            text(RecordField::SegmentDescription),
            answer,
            count,
        )
        .with_question(text(RecordField::Question)),
    )
}

/// Positive integer counts only. "0", "-3", "abc" and "2.5" are rejected.
pub fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|count| *count > 0)
}
