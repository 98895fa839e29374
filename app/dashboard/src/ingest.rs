//! FILENAME: app/dashboard/src/ingest.rs
//! PURPOSE: Loads a survey export into the application state.
//! CONTEXT: Reads CSV or XLSX, checks the headers, normalizes the rows and
//! swaps the result in as the new dataset. Success and failure are both
//! reported to the user through a Notification; a failed load leaves the
//! dataset empty.

use std::path::{Path, PathBuf};

use persistence::{load_source, PersistenceError};
use survey_engine::{normalize_with_report, CanonicalRecord, ColumnMapping, NormalizeReport};

use crate::api_types::{LoadResult, Notification};
use crate::error::LoadError;
use crate::{log_enter_info, log_error, log_exit_info, AppState};

const LOADED_TITLE: &str = "Dados carregados com sucesso!";
const FAILED_TITLE: &str = "Erro ao carregar dados";
const UNREADABLE_FILE: &str = "Não foi possível carregar o arquivo de dados.";
const UNUSABLE_FILE: &str = "Verifique se o arquivo CSV está disponível.";

fn read_dataset(
    path: &Path,
    columns: &ColumnMapping,
) -> Result<(Vec<CanonicalRecord>, NormalizeReport), LoadError> {
    let table = load_source(path)?;

    if !table.headers.is_empty() && !columns.covers(&table.headers) {
        return Err(LoadError::MissingColumns(table.headers));
    }

    Ok(normalize_with_report(&table.rows, columns))
}

fn failure_notification(error: &LoadError) -> Notification {
    let description = match error {
        LoadError::Source(PersistenceError::Io(_)) | LoadError::NoPath => UNREADABLE_FILE,
        _ => UNUSABLE_FILE,
    };
    Notification::destructive(FAILED_TITLE, description)
}

fn poisoned<E: std::fmt::Display>(e: E) -> LoadError {
    LoadError::Lock(e.to_string())
}

fn set_loading(state: &AppState, loading: bool) -> Result<(), LoadError> {
    *state.is_loading.lock().map_err(poisoned)? = loading;
    Ok(())
}

/// Replace dataset, report and source path, and reset filters and table.
fn install_dataset(
    state: &AppState,
    path: Option<PathBuf>,
    records: Vec<CanonicalRecord>,
    report: Option<NormalizeReport>,
) -> Result<(), LoadError> {
    *state.dataset.lock().map_err(poisoned)? = records;
    *state.load_report.lock().map_err(poisoned)? = report;
    *state.source_path.lock().map_err(poisoned)? = path;
    state.filters.lock().map_err(poisoned)?.clear();
    state.table.lock().map_err(poisoned)?.reset();
    Ok(())
}

fn load_into(state: &AppState, path: &Path) -> Result<(usize, NormalizeReport), LoadError> {
    set_loading(state, true)?;
    let outcome = read_dataset(path, &state.config.columns);
    set_loading(state, false)?;

    let (records, report) = outcome?;
    let count = records.len();
    install_dataset(state, Some(path.to_path_buf()), records, Some(report))?;
    Ok((count, report))
}

/// Load a CSV or XLSX survey export. The file type follows the extension.
pub fn load_dataset(state: &AppState, path: &str) -> LoadResult {
    log_enter_info!("INGEST", "load_dataset", "path={}", path);

    match load_into(state, Path::new(path)) {
        Ok((record_count, report)) => {
            log_exit_info!(
                "INGEST",
                "load_dataset",
                "records={} rows={} dropped={} merged={}",
                record_count,
                report.rows_read,
                report.dropped,
                report.merged
            );
            LoadResult {
                success: true,
                record_count,
                report: Some(report),
                notification: Notification::info(
                    LOADED_TITLE,
                    format!("{} registros processados.", record_count),
                ),
                error: None,
            }
        }
        Err(e) => {
            log_error!("INGEST", "load_dataset failed: {}", e);
            if let Err(clear_err) = install_dataset(state, None, Vec::new(), None) {
                log_error!("INGEST", "could not clear dataset: {}", clear_err);
            }
            LoadResult {
                success: false,
                record_count: 0,
                report: None,
                notification: failure_notification(&e),
                error: Some(e.to_string()),
            }
        }
    }
}

/// Load the file named by `dataPath` in the configuration.
pub fn load_configured_dataset(state: &AppState) -> LoadResult {
    match &state.config.data_path {
        Some(path) => load_dataset(state, &path.to_string_lossy()),
        None => {
            let e = LoadError::NoPath;
            log_error!("INGEST", "load_configured_dataset: {}", e);
            LoadResult {
                success: false,
                record_count: 0,
                report: None,
                notification: failure_notification(&e),
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_notifications() {
        let io = LoadError::Source(PersistenceError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        )));
        let n = failure_notification(&io);
        assert_eq!(n.title, FAILED_TITLE);
        assert_eq!(n.description, UNREADABLE_FILE);
        assert_eq!(n.variant, crate::NotificationVariant::Destructive);

        let cols = failure_notification(&LoadError::MissingColumns(vec!["Foo".to_string()]));
        assert_eq!(cols.description, UNUSABLE_FILE);
    }

    #[test]
    fn test_read_dataset_rejects_unknown_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Foo,Bar\n1,2\n").unwrap();

        let err = read_dataset(&path, &ColumnMapping::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumns(_)));
    }
}
