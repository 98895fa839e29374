//! FILENAME: core/engine/src/aggregate.rs
//! PURPOSE: Group-by-key aggregation and percentage computation.
//! CONTEXT: Records sharing (segment type, segment description, answer) are
//! merged by summing their counts. Percentages are always relative to the
//! collection passed in, so the same call serves "share of all responses"
//! and "share within the filtered view". Count sums saturate at `u64::MAX`.

use rustc_hash::FxHashMap;

use crate::record::CanonicalRecord;

/// Borrowed grouping identity of a record.
type GroupKey<'a> = (&'a str, &'a str, &'a str);

fn group_key(record: &CanonicalRecord) -> GroupKey<'_> {
    (
        record.segment_type.as_str(),
        record.segment_description.as_str(),
        record.answer.as_str(),
    )
}

/// Merges records by key and recomputes every percentage against the total
/// count of `records`. Output order is the order in which each key was first
/// encountered; the merged record keeps the question of its first member.
pub fn aggregate(records: &[CanonicalRecord]) -> Vec<CanonicalRecord> {
    let mut index: FxHashMap<GroupKey<'_>, usize> = FxHashMap::default();
    let mut grouped: Vec<CanonicalRecord> = Vec::new();

    for record in records {
        match index.get(&group_key(record)) {
            Some(&slot) => {
                let merged = &mut grouped[slot];
                merged.count = merged.count.saturating_add(record.count);
            }
            None => {
                index.insert(group_key(record), grouped.len());
                grouped.push(record.clone());
            }
        }
    }

    let total = total_count(&grouped);
    for record in &mut grouped {
        record.percentage = share(record.count, total);
    }
    grouped
}

/// Sum of `count` over the collection, saturating at `u64::MAX`.
pub fn total_count(records: &[CanonicalRecord]) -> u64 {
    records.iter().fold(0u64, |acc, r| acc.saturating_add(r.count))
}

/// `part / total`, defined as 0 when the total is 0.
pub fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
