//! FILENAME: app/dashboard/src/lib.rs
// PURPOSE: Main library entry point for the DataPulse dashboard backend.
// CONTEXT: All UI state lives in AppState; the core crates are pure and get
// everything they need passed in. Commands take `&AppState` and return
// camelCase-serializable result structs.

use std::path::PathBuf;
use std::sync::Mutex;

use insight_engine::QuestionLookup;
use survey_engine::{CanonicalRecord, FilterState, NormalizeReport};

pub mod api_types;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod filters;
pub mod ingest;
pub mod logging;
pub mod table;

pub use api_types::{
    DashboardView, ExportResult, FilterResult, LoadResult, Notification, NotificationVariant,
    SegmentChart, TablePage,
};
pub use config::{DashboardConfig, DEFAULT_PAGE_SIZE};
pub use dashboard::{build_view, get_dashboard_view};
pub use error::{ConfigError, LoadError};
pub use export::{export_csv, export_pdf, export_records, export_xlsx};
pub use filters::{clear_filters, get_filter_options, get_filters, set_filter};
pub use ingest::{load_configured_dataset, load_dataset};
pub use logging::{get_log_path, init_log_file, next_seq, write_log};
pub use table::{
    build_page, get_table_page, set_table_page, set_table_search, sort_table, total_pages,
    TableState,
};

// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct AppState {
    pub config: DashboardConfig,
    /// Built-in question labels plus the configured ones.
    pub question_lookup: QuestionLookup,
    /// Canonical records of the loaded dataset (empty until a load succeeds).
    pub dataset: Mutex<Vec<CanonicalRecord>>,
    pub source_path: Mutex<Option<PathBuf>>,
    pub load_report: Mutex<Option<NormalizeReport>>,
    /// Dashboard-wide filter selections.
    pub filters: Mutex<FilterState>,
    pub table: Mutex<TableState>,
    pub is_loading: Mutex<bool>,
}

pub fn create_app_state(config: DashboardConfig) -> AppState {
    log_info!("SYS", "Creating AppState");
    let question_lookup = QuestionLookup::with_entries(&config.question_translations);
    let table = TableState::new(config.page_size);
    AppState {
        config,
        question_lookup,
        dataset: Mutex::new(Vec::new()),
        source_path: Mutex::new(None),
        load_report: Mutex::new(None),
        filters: Mutex::new(FilterState::default()),
        table: Mutex::new(table),
        is_loading: Mutex::new(false),
    }
}

/// Open the configured log file (if any) and route core crate logging into it.
pub fn init_logging(config: &DashboardConfig) -> Result<Option<PathBuf>, String> {
    let path = match &config.log_path {
        Some(path) => Some(init_log_file(path)?),
        None => None,
    };
    logging::install(log::LevelFilter::Debug);
    log_info!("SYS", "Logging initialized path={:?}", path);
    Ok(path)
}
