//! FILENAME: core/persistence/src/source.rs
//! PURPOSE: Header-addressed rows as delivered by the CSV and XLSX readers.
//! CONTEXT: Rows share one header list; lookups go through the engine's
//! RawRow trait so the normalizer never depends on a concrete file format.

use std::sync::Arc;

use survey_engine::RawRow;

/// One data row. Values line up with the shared header list; short rows
/// simply have no value for the trailing headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl SourceRow {
    pub fn new(headers: Arc<[String]>, values: Vec<String>) -> Self {
        SourceRow { headers, values }
    }
}

impl RawRow for SourceRow {
    fn field(&self, name: &str) -> Option<&str> {
        let index = self.headers.iter().position(|h| h == name)?;
        self.values.get(index).map(String::as_str)
    }
}

/// A parsed source file: its header row plus the non-blank data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
}

impl SourceTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Collects values into rows, skipping rows where every value is blank.
pub(crate) fn build_table<I>(headers: Vec<String>, rows: I) -> SourceTable
where
    I: IntoIterator<Item = Vec<String>>,
{
    let shared: Arc<[String]> = headers.iter().cloned().collect();
    let rows = rows
        .into_iter()
        .filter(|values| values.iter().any(|v| !v.trim().is_empty()))
        .map(|values| SourceRow::new(Arc::clone(&shared), values))
        .collect();

    SourceTable { headers, rows }
}
