//! FILENAME: core/persistence/src/report.rs
//! PURPOSE: Shared layout of exported reports (columns, labels, file names, pages).
//! CONTEXT: CSV, XLSX and PDF exports all render the same five columns from
//! the filtered record set. Dates are passed in so output is deterministic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use survey_engine::CanonicalRecord;

pub const BRAND: &str = "DataPulse";
pub const REPORT_TITLE: &str = "DataPulse - Relatório de Dados";

pub const REPORT_HEADERS: [&str; 5] = [
    "Tipo de Segmento",
    "Descrição",
    "Plataforma",
    "Contagem",
    "Percentual",
];

// ============================================================================
// EXPORT KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportKind {
    Csv,
    Xlsx,
    Pdf,
}

impl ExportKind {
    /// "datapulse-dados-2024-05-01.csv", "datapulse-relatorio-2024-05-01.pdf", ...
    pub fn file_name(self, date: NaiveDate) -> String {
        match self {
            ExportKind::Csv => format!("datapulse-dados-{}.csv", date.format("%Y-%m-%d")),
            ExportKind::Xlsx => format!("datapulse-dados-{}.xlsx", date.format("%Y-%m-%d")),
            ExportKind::Pdf => format!("datapulse-relatorio-{}.pdf", date.format("%Y-%m-%d")),
        }
    }
}

// ============================================================================
// REPORT ROW
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub segment_type: String,
    pub segment_description: String,
    pub platform: String,
    pub count: u64,
    pub percentage: f64,
}

impl From<&CanonicalRecord> for ReportRow {
    fn from(record: &CanonicalRecord) -> Self {
        ReportRow {
            segment_type: record.segment_type.clone(),
            segment_description: record.segment_description.clone(),
            platform: record.answer.clone(),
            count: record.count,
            percentage: record.percentage,
        }
    }
}

impl ReportRow {
    /// Display text for each column, in REPORT_HEADERS order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.segment_type.clone(),
            self.segment_description.clone(),
            self.platform.clone(),
            self.count.to_string(),
            format_percentage(self.percentage),
        ]
    }
}

pub fn report_rows(records: &[CanonicalRecord]) -> Vec<ReportRow> {
    records.iter().map(ReportRow::from).collect()
}

/// 0.25 -> "25.0%"
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

// ============================================================================
// LABELS
// ============================================================================

pub fn generated_label(date: NaiveDate) -> String {
    format!("Gerado em: {}", date.format("%d/%m/%Y"))
}

pub fn record_count_label(count: usize) -> String {
    format!("Total de registros: {}", count)
}

pub fn page_footer(page: usize, total_pages: usize, date: NaiveDate) -> String {
    format!("Página {} de {} - {} © {}", page, total_pages, BRAND, date.year())
}

// ============================================================================
// PAGINATION
// ============================================================================

/// Splits rows into pages. The first page holds fewer rows because it also
/// carries the title block. An empty report still has one (title-only) page.
pub fn paginate<T>(rows: &[T], first_page_rows: usize, rows_per_page: usize) -> Vec<&[T]> {
    let first_page_rows = first_page_rows.max(1);
    let rows_per_page = rows_per_page.max(1);

    let split = first_page_rows.min(rows.len());
    let (first, rest) = rows.split_at(split);

    let mut pages = vec![first];
    pages.extend(rest.chunks(rows_per_page));
    pages
}
