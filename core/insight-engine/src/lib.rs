//! FILENAME: core/insight-engine/src/lib.rs
//! Summary extractors for the DataPulse dashboard.
//!
//! This crate derives presentation-ready views from canonical records. It
//! depends on `survey-engine` only for the record and filter types.
//!
//! Layers:
//! - `views`: Aggregated chart data (platform totals, segment breakdowns, rankings)
//! - `summary`: Labels and filter option lists
//! - `stats`: Headline statistic cards

pub mod views;
pub mod summary;
pub mod stats;

pub use views::{
    platform_totals, rank_totals, segment_data, top_segments, AnswerCount, PlatformTotal,
    SegmentBreakdown, SegmentData, SegmentTotal, DEFAULT_TOP_N,
};
pub use summary::{
    fallback_summary, filter_options, normalize_question, question_summary, unique_values,
    FilterOptions, QuestionLookup, QUESTION_CANDIDATES,
};
pub use stats::{dashboard_stats, DashboardStats, NO_PLATFORM};
