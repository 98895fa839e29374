//! FILENAME: app/dashboard/src/dashboard.rs
//! PURPOSE: Assembles the dashboard view (headline, stat cards, charts).
//! CONTEXT: The question headline describes the whole dataset; every
//! statistic and chart reflects only the filtered records.

use insight_engine::{
    dashboard_stats, platform_totals, question_summary, segment_data, top_segments, QuestionLookup,
};
use survey_engine::{filter, CanonicalRecord, FilterState};

use crate::api_types::{DashboardView, SegmentChart};
use crate::{log_debug, AppState};

/// Pure view construction over an explicit dataset and filter selection.
pub fn build_view(
    records: &[CanonicalRecord],
    filters: &FilterState,
    lookup: &QuestionLookup,
    chart_segments: &[String],
    top_n: usize,
) -> DashboardView {
    let filtered = filter(records, filters);

    let segment_charts = chart_segments
        .iter()
        .map(|segment_type| {
            let data = segment_data(&filtered, segment_type);
            let top = top_segments(&data, top_n);
            SegmentChart {
                segment_type: segment_type.clone(),
                data,
                top,
            }
        })
        .collect();

    DashboardView {
        question: question_summary(records, lookup),
        stats: dashboard_stats(&filtered),
        platform_totals: platform_totals(&filtered),
        segment_charts,
        filters: filters.clone(),
        total_records: records.len(),
        filtered_records: filtered.len(),
        is_loading: false,
    }
}

pub fn get_dashboard_view(state: &AppState) -> Result<DashboardView, String> {
    let is_loading = *state.is_loading.lock().map_err(|e| e.to_string())?;
    let dataset = state.dataset.lock().map_err(|e| e.to_string())?;
    let filters = state.filters.lock().map_err(|e| e.to_string())?;

    let mut view = build_view(
        &dataset,
        &filters,
        &state.question_lookup,
        &state.config.chart_segments,
        state.config.top_n,
    );
    view.is_loading = is_loading;

    log_debug!(
        "DASH",
        "get_dashboard_view total={} filtered={} platforms={}",
        view.total_records,
        view.filtered_records,
        view.platform_totals.len()
    );
    Ok(view)
}
