//! FILENAME: core/persistence/src/lib.rs
//! DataPulse Persistence Module
//!
//! Reads survey exports (CSV or XLSX) into header-addressed rows for the
//! normalizer, and writes the filtered record set back out as CSV, XLSX or PDF.

mod csv_reader;
mod csv_writer;
mod error;
mod pdf_writer;
pub mod report;
mod source;
mod xlsx_reader;
mod xlsx_writer;

pub use csv_reader::{load_csv, read_csv};
pub use csv_writer::{csv_to_string, export_csv, write_csv};
pub use error::PersistenceError;
pub use pdf_writer::{export_pdf, render_pdf, FIRST_PAGE_ROWS, ROWS_PER_PAGE};
pub use report::{ExportKind, ReportRow, REPORT_HEADERS, REPORT_TITLE};
pub use source::{SourceRow, SourceTable};
pub use xlsx_reader::load_xlsx;
pub use xlsx_writer::{build_xlsx, export_xlsx, xlsx_to_bytes};

use std::path::Path;

// ============================================================================
// SOURCE FORMAT
// ============================================================================

/// Input file formats the loader understands, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xlsx,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self, PersistenceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "txt" => Ok(SourceFormat::Csv),
            "xlsx" | "xlsm" => Ok(SourceFormat::Xlsx),
            other => Err(PersistenceError::InvalidFormat(format!(
                "Unsupported file extension: '{}'",
                other
            ))),
        }
    }
}

/// Loads a survey export, dispatching on its extension.
pub fn load_source(path: &Path) -> Result<SourceTable, PersistenceError> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Csv => load_csv(path),
        SourceFormat::Xlsx => load_xlsx(path),
    }
}
