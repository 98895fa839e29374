//! FILENAME: core/insight-engine/src/stats.rs
//! PURPOSE: Headline numbers for the dashboard's statistic cards.
//! CONTEXT: Computed over the filtered record set on every recomputation.

use serde::{Deserialize, Serialize};
use survey_engine::{share, total_count, CanonicalRecord};

use crate::views::platform_totals;

/// Label shown when no platform has any responses.
pub const NO_PLATFORM: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of canonical records in the view.
    pub record_count: usize,
    /// Sum of respondent counts, "None" answers included.
    pub total_responses: u64,
    /// Distinct answers excluding "None".
    pub unique_platforms: usize,
    pub top_platform: String,
    pub top_platform_count: u64,
    /// top_platform_count / total_responses, 0 when there are no responses.
    pub engagement_rate: f64,
}

pub fn dashboard_stats(records: &[CanonicalRecord]) -> DashboardStats {
    let totals = platform_totals(records);
    let total_responses = total_count(records);

    let (top_platform, top_platform_count) = totals
        .first()
        .map(|t| (t.platform.clone(), t.count))
        .unwrap_or_else(|| (NO_PLATFORM.to_string(), 0));

    DashboardStats {
        record_count: records.len(),
        total_responses,
        unique_platforms: totals.len(),
        top_platform,
        top_platform_count,
        engagement_rate: share(top_platform_count, total_responses),
    }
}
