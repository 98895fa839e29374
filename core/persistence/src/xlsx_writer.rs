//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::report::{report_rows, REPORT_HEADERS};
use crate::PersistenceError;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook as XlsxWorkbook};
use std::path::Path;
use survey_engine::CanonicalRecord;

const SHEET_NAME: &str = "Dados";

/// Column widths in Excel character units, in REPORT_HEADERS order.
const COLUMN_WIDTHS: [f64; 5] = [22.0, 28.0, 18.0, 12.0, 12.0];

pub fn build_xlsx(records: &[CanonicalRecord]) -> Result<XlsxWorkbook, PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x428BCA))
        .set_border_bottom(FormatBorder::Thin);
    let percent_format = Format::new().set_num_format("0.0%");

    for (col, (header, width)) in REPORT_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        worksheet.set_column_width(col as u16, width)?;
    }

    for (i, row) in report_rows(records).iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.segment_type)?;
        worksheet.write_string(r, 1, &row.segment_description)?;
        worksheet.write_string(r, 2, &row.platform)?;
        worksheet.write_number(r, 3, row.count as f64)?;
        worksheet.write_number_with_format(r, 4, row.percentage, &percent_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;
    Ok(xlsx)
}

pub fn export_xlsx(records: &[CanonicalRecord], path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = build_xlsx(records)?;
    xlsx.save(path)?;
    Ok(())
}

pub fn xlsx_to_bytes(records: &[CanonicalRecord]) -> Result<Vec<u8>, PersistenceError> {
    let mut xlsx = build_xlsx(records)?;
    Ok(xlsx.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xlsx_reader::load_xlsx;
    use survey_engine::{aggregate, RawRow};

    #[test]
    fn test_export_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let records = aggregate(&[
            CanonicalRecord::new("Gender", "Male", "Twitter", 30),
            CanonicalRecord::new("Gender", "Female", "Instagram", 10),
        ]);

        export_xlsx(&records, &path).unwrap();
        let table = load_xlsx(&path).unwrap();

        assert_eq!(table.headers, REPORT_HEADERS.map(String::from).to_vec());
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].field("Plataforma"), Some("Twitter"));
        assert_eq!(table.rows[0].field("Contagem"), Some("30"));
        assert_eq!(table.rows[1].field("Percentual"), Some("0.25"));
    }

    #[test]
    fn test_xlsx_bytes_are_a_zip_container() {
        let bytes = xlsx_to_bytes(&[CanonicalRecord::new("Gender", "Male", "Twitter", 1)]).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
