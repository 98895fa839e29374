//! FILENAME: app/dashboard/src/error.rs

use persistence::PersistenceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Why a dataset could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] PersistenceError),

    #[error("No answer/count columns found in headers: {0:?}")]
    MissingColumns(Vec<String>),

    #[error("No dataset path configured")]
    NoPath,

    #[error("State lock poisoned: {0}")]
    Lock(String),
}
