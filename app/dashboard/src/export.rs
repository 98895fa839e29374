//! FILENAME: app/dashboard/src/export.rs
//! PURPOSE: Export commands for the filtered record set.
//! CONTEXT: Files are named after the export date and written to the given
//! directory, or the configured export directory when none is given.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use persistence::{export_csv as write_csv_file, export_pdf as write_pdf_file};
use persistence::{export_xlsx as write_xlsx_file, ExportKind, PersistenceError};
use survey_engine::CanonicalRecord;

use crate::api_types::ExportResult;
use crate::filters::filtered_records;
use crate::{log_enter_info, log_error, log_exit_info, AppState};

fn write_export(
    kind: ExportKind,
    records: &[CanonicalRecord],
    path: &Path,
    date: NaiveDate,
) -> Result<(), PersistenceError> {
    match kind {
        ExportKind::Csv => write_csv_file(records, path),
        ExportKind::Xlsx => write_xlsx_file(records, path),
        ExportKind::Pdf => write_pdf_file(records, path, date),
    }
}

fn target_dir(state: &AppState, dir: &str) -> PathBuf {
    if dir.trim().is_empty() {
        state.config.export_dir.clone()
    } else {
        PathBuf::from(dir)
    }
}

/// Export the filtered records as `kind`, stamped with `date`.
pub fn export_records(state: &AppState, kind: ExportKind, dir: &str, date: NaiveDate) -> ExportResult {
    log_enter_info!("EXPORT", "export_records", "kind={:?} dir={}", kind, dir);

    let records = match filtered_records(state) {
        Ok(records) => records,
        Err(e) => {
            log_error!("EXPORT", "export_records: {}", e);
            return ExportResult {
                success: false,
                kind,
                path: None,
                record_count: 0,
                error: Some(e),
            };
        }
    };

    let path = target_dir(state, dir).join(kind.file_name(date));

    match write_export(kind, &records, &path, date) {
        Ok(()) => {
            log_exit_info!("EXPORT", "export_records", "path={} records={}", path.display(), records.len());
            ExportResult {
                success: true,
                kind,
                path: Some(path.to_string_lossy().to_string()),
                record_count: records.len(),
                error: None,
            }
        }
        Err(e) => {
            log_error!("EXPORT", "export_records failed path={}: {}", path.display(), e);
            ExportResult {
                success: false,
                kind,
                path: None,
                record_count: records.len(),
                error: Some(e.to_string()),
            }
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn export_csv(state: &AppState, dir: &str) -> ExportResult {
    export_records(state, ExportKind::Csv, dir, today())
}

pub fn export_xlsx(state: &AppState, dir: &str) -> ExportResult {
    export_records(state, ExportKind::Xlsx, dir, today())
}

pub fn export_pdf(state: &AppState, dir: &str) -> ExportResult {
    export_records(state, ExportKind::Pdf, dir, today())
}
