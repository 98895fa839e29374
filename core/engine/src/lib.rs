//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the survey record pipeline.
//! CONTEXT: raw rows -> normalize -> canonical records -> filter/sort/aggregate.
//! Every function here is pure; callers own all state and pass it in.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod record;
pub mod row;
pub mod sort;

// Re-export commonly used types at the crate root
pub use aggregate::{aggregate, share, total_count};
pub use error::EngineError;
pub use filter::{filter, search, FilterState, ALL_OPTION, FILTER_FIELDS};
pub use normalize::{normalize, normalize_row, normalize_with_report, parse_count, NormalizeReport};
pub use record::{capitalize_answer, is_none_answer, CanonicalRecord, RecordField, NONE_ANSWER};
pub use row::{ColumnMapping, RawRow};
pub use sort::{compare_by, sort, sort_by_name, SortDirection, SortState};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn raw(segment_type: &str, description: &str, answer: &str, count: &str) -> HashMap<String, String> {
        [
            ("Segment Type", segment_type),
            ("Segment Description", description),
            ("Answer", answer),
            ("Count", count),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn integration_test_pipeline() {
        let rows = vec![
            raw("Gender", "Male", "twitter", "10"),
            raw("Gender", "Female", "Instagram", "30"),
            raw("Gender", "Female", "NONE", "5"),
            raw("University", "Stanford", "Twitter", "15"),
            raw("University", "Stanford", "Twitter", "bogus"),
        ];

        let records = normalize(&rows, &ColumnMapping::default());
        assert_eq!(records.len(), 4);
        assert_eq!(total_count(&records), 60);

        let mut state = FilterState::new();
        state.set(RecordField::SegmentType, "Gender").unwrap();
        let gender = filter(&records, &state);
        assert_eq!(gender.len(), 3);

        // Re-aggregating the view rebases percentages on the view total
        let view = aggregate(&gender);
        let sum: f64 = view.iter().map(|r| r.percentage).sum();
        assert!((sum - 1.0).abs() < 1e-9);

        let sorted = sort(&view, RecordField::Count, SortDirection::Descending);
        assert_eq!(sorted[0].answer, "Instagram");
        assert_eq!(sorted[2].answer, "None");
    }
}
