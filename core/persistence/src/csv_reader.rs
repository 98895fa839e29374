//! FILENAME: core/persistence/src/csv_reader.rs

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::debug;

use crate::source::{build_table, SourceTable};
use crate::PersistenceError;

const UTF8_BOM: char = '\u{feff}';

pub fn load_csv(path: &Path) -> Result<SourceTable, PersistenceError> {
    let file = File::open(path)?;
    let table = read_csv(BufReader::new(file))?;
    debug!("load_csv path={} rows={}", path.display(), table.len());
    Ok(table)
}

/// Parses CSV text with a header row. Rows may be shorter or longer than the
/// header; blank lines are skipped and every field is trimmed.
pub fn read_csv<R: Read>(reader: R) -> Result<SourceTable, PersistenceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(UTF8_BOM).to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<String>>());
    }

    Ok(build_table(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use survey_engine::RawRow;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\u{feff}Question,Segment Type,Segment Description,Answer,Count,Percentage
\"What social platform has influenced your online shopping most?\",Gender,Male,Twitter,10,0.25

\"What social platform has influenced your online shopping most?\",Gender,Female, instagram ,30,0.75
";

    #[test]
    fn test_read_csv_headers_and_rows() {
        let table = read_csv(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            table.headers,
            vec!["Question", "Segment Type", "Segment Description", "Answer", "Count", "Percentage"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].field("Question"), Some("What social platform has influenced your online shopping most?"));
        assert_eq!(table.rows[1].field("Answer"), Some("instagram"));
    }

    #[test]
    fn test_read_csv_tolerates_ragged_rows() {
        let table = read_csv("Answer,Count\nTwitter\nFacebook,3,extra\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].field("Count"), None);
        assert_eq!(table.rows[1].field("Count"), Some("3"));
    }

    #[test]
    fn test_read_empty_input() {
        let table = read_csv("".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert!(table.headers.is_empty());
    }

    #[test]
    fn test_load_csv_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load_csv(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_csv(Path::new("/nonexistent/datapulse.csv")).unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)));
    }
}
