//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

use crate::record::RecordField;

/// Programming errors raised by the pipeline. Row-level data problems never
/// surface here; the normalizer drops those rows silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown record field: {0}")]
    UnknownField(String),

    #[error("Field cannot be used as a filter: {0}")]
    NotFilterable(RecordField),
}
