// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::source::{build_table, SourceTable};
use crate::PersistenceError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Reads the first worksheet of an XLSX survey export. The first row is the
/// header row; cells are rendered as text so the normalizer sees the same
/// shapes it gets from CSV.
pub fn load_xlsx(path: &Path) -> Result<SourceTable, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PersistenceError::InvalidFormat("Workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_text).collect(),
        None => return Ok(SourceTable::default()),
    };

    let data = rows.map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    Ok(build_table(headers, data))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            // Counts come back as floats; keep them parseable as integers
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("{:?}", e),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
