//! FILENAME: app/dashboard/src/table.rs
//! PURPOSE: Data table state (column search, sort, paging) and its commands.
//! CONTEXT: The table shows the dashboard-filtered records, narrowed by
//! per-column case-insensitive search, sorted, then cut into fixed-size
//! pages. Pages are 1-based; the page number is clamped on every read.

use serde::{Deserialize, Serialize};
use survey_engine::{search, CanonicalRecord, EngineError, FilterState, RecordField, SortState};

use crate::api_types::TablePage;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::filters::filtered_records;
use crate::{log_debug, AppState};

// ============================================================================
// TABLE STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    /// Column search terms. Unlike dashboard filters these are independent.
    pub search: FilterState,
    pub sort: SortState,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        TableState::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        TableState {
            search: FilterState::default(),
            sort: SortState::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Sets one column's search term and returns to the first page.
    pub fn set_search(&mut self, field: RecordField, term: &str) -> Result<(), EngineError> {
        let slot = match field {
            RecordField::SegmentType => &mut self.search.segment_type,
            RecordField::SegmentDescription => &mut self.search.segment_description,
            RecordField::Answer => &mut self.search.answer,
            other => return Err(EngineError::NotFilterable(other)),
        };
        *slot = term.to_string();
        self.page = 1;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = TableState::new(self.page_size);
    }
}

/// Number of pages for `rows` rows; an empty table still has one page.
pub fn total_pages(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size.max(1)).max(1)
}

/// Search, sort and slice `records` per `table`.
pub fn build_page(records: &[CanonicalRecord], table: &TableState) -> TablePage {
    let matching = search(records, &table.search);
    let sorted = table.sort.apply(&matching);

    let page_size = table.page_size.max(1);
    let pages = total_pages(sorted.len(), page_size);
    let page = table.page.clamp(1, pages);
    let start = (page - 1) * page_size;
    let rows = sorted.iter().skip(start).take(page_size).cloned().collect();

    TablePage {
        rows,
        page,
        page_size,
        total_pages: pages,
        total_rows: sorted.len(),
        sort: table.sort,
        search: table.search.clone(),
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

pub fn get_table_page(state: &AppState) -> Result<TablePage, String> {
    let records = filtered_records(state)?;
    let table = state.table.lock().map_err(|e| e.to_string())?;
    Ok(build_page(&records, &table))
}

pub fn set_table_search(state: &AppState, field: &str, term: &str) -> Result<TablePage, String> {
    log_debug!("TABLE", "set_table_search field={} term={}", field, term);
    let field: RecordField = field.parse().map_err(|e: EngineError| e.to_string())?;
    state
        .table
        .lock()
        .map_err(|e| e.to_string())?
        .set_search(field, term)
        .map_err(|e| e.to_string())?;
    get_table_page(state)
}

/// Header click: same column flips direction, a new column sorts descending.
pub fn sort_table(state: &AppState, field: &str) -> Result<TablePage, String> {
    log_debug!("TABLE", "sort_table field={}", field);
    let field: RecordField = field.parse().map_err(|e: EngineError| e.to_string())?;
    state.table.lock().map_err(|e| e.to_string())?.sort.toggle(field);
    get_table_page(state)
}

/// Jump to `page`, clamped to the valid range.
pub fn set_table_page(state: &AppState, page: usize) -> Result<TablePage, String> {
    let records = filtered_records(state)?;
    let mut table = state.table.lock().map_err(|e| e.to_string())?;

    let matching = search(&records, &table.search).len();
    table.page = page.clamp(1, total_pages(matching, table.page_size));
    log_debug!("TABLE", "set_table_page requested={} page={}", page, table.page);

    Ok(build_page(&records, &table))
}
