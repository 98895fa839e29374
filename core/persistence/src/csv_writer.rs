//! FILENAME: core/persistence/src/csv_writer.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use survey_engine::CanonicalRecord;

use crate::report::{ReportRow, REPORT_HEADERS};
use crate::PersistenceError;

/// Writes the report header plus one line per record. Text fields are
/// double-quoted, counts are written bare.
pub fn write_csv<W: Write>(writer: W, records: &[CanonicalRecord]) -> Result<(), PersistenceError> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    out.write_record(REPORT_HEADERS)?;
    for record in records {
        out.write_record(ReportRow::from(record).cells())?;
    }
    out.flush()?;
    Ok(())
}

pub fn export_csv(records: &[CanonicalRecord], path: &Path) -> Result<(), PersistenceError> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), records)
}

pub fn csv_to_string(records: &[CanonicalRecord]) -> Result<String, PersistenceError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    String::from_utf8(buffer).map_err(|e| PersistenceError::InvalidFormat(e.to_string()))
}
