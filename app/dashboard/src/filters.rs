//! FILENAME: app/dashboard/src/filters.rs
//! PURPOSE: Dashboard-wide filter selection commands.
//! CONTEXT: Selectors send "all" for no constraint. Changing the segment
//! type clears the segment description. Any filter change sends the data
//! table back to page 1.

use insight_engine::{filter_options, FilterOptions};
use survey_engine::{filter, CanonicalRecord, FilterState, RecordField};

use crate::api_types::FilterResult;
use crate::{log_debug, log_warn, AppState};

/// Records of the loaded dataset passing the current filters.
pub(crate) fn filtered_records(state: &AppState) -> Result<Vec<CanonicalRecord>, String> {
    let dataset = state.dataset.lock().map_err(|e| e.to_string())?;
    let filters = state.filters.lock().map_err(|e| e.to_string())?;
    Ok(filter(&dataset, &filters))
}

fn filter_result(state: &AppState, error: Option<String>) -> FilterResult {
    let filters = state
        .filters
        .lock()
        .map(|f| f.clone())
        .unwrap_or_default();
    let filtered_count = filtered_records(state).map(|r| r.len()).unwrap_or(0);

    FilterResult {
        success: error.is_none(),
        filters,
        filtered_count,
        error,
    }
}

fn reset_table_page(state: &AppState) -> Result<(), String> {
    state.table.lock().map_err(|e| e.to_string())?.page = 1;
    Ok(())
}

/// Set one selector. `field` is the camelCase record field name.
pub fn set_filter(state: &AppState, field: &str, value: &str) -> FilterResult {
    log_debug!("FILTER", "set_filter field={} value={}", field, value);

    let outcome = field
        .parse::<RecordField>()
        .map_err(|e| e.to_string())
        .and_then(|field| {
            let mut filters = state.filters.lock().map_err(|e| e.to_string())?;
            filters.set(field, value).map_err(|e| e.to_string())
        })
        .and_then(|()| reset_table_page(state));

    match outcome {
        Ok(()) => filter_result(state, None),
        Err(e) => {
            log_warn!("FILTER", "set_filter rejected: {}", e);
            filter_result(state, Some(e))
        }
    }
}

pub fn clear_filters(state: &AppState) -> FilterResult {
    log_debug!("FILTER", "clear_filters");

    let outcome = state
        .filters
        .lock()
        .map_err(|e| e.to_string())
        .map(|mut filters| filters.clear())
        .and_then(|()| reset_table_page(state));

    filter_result(state, outcome.err())
}

pub fn get_filters(state: &AppState) -> Result<FilterState, String> {
    Ok(state.filters.lock().map_err(|e| e.to_string())?.clone())
}

/// Choices for the three selectors, taken from the full dataset.
pub fn get_filter_options(state: &AppState) -> Result<FilterOptions, String> {
    let dataset = state.dataset.lock().map_err(|e| e.to_string())?;
    let filters = state.filters.lock().map_err(|e| e.to_string())?;
    Ok(filter_options(&dataset, &filters))
}
