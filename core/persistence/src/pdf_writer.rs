//! FILENAME: core/persistence/src/pdf_writer.rs
//! PURPOSE: Renders the filtered record set as a paginated A4 PDF report.
//! CONTEXT: Layout is fixed: title block on page one, a bold header row on
//! every page, and a "Página i de N" footer. Uses the built-in Helvetica
//! faces so no font files need to ship with the app.

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::debug;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use survey_engine::CanonicalRecord;

use crate::report::{
    generated_label, page_footer, paginate, record_count_label, report_rows, ReportRow,
    REPORT_HEADERS, REPORT_TITLE,
};
use crate::PersistenceError;

// ============================================================================
// PAGE GEOMETRY (millimetres, origin bottom-left)
// ============================================================================

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 14.0;
const TOP: f32 = 280.0;
const LINE_HEIGHT: f32 = 6.5;
const FOOTER_Y: f32 = 10.0;

/// Left edge of each column, in REPORT_HEADERS order.
const COLUMN_X: [f32; 5] = [14.0, 56.0, 104.0, 146.0, 172.0];

/// Rows that fit under the title block on the first page.
pub const FIRST_PAGE_ROWS: usize = 34;
/// Rows that fit on every following page.
pub const ROWS_PER_PAGE: usize = 38;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 9.0;
const FOOTER_SIZE: f32 = 8.0;

/// Longest cell text before it is cut with an ellipsis.
const MAX_CELL_CHARS: usize = 26;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn pdf_err<E: Debug>(e: E) -> PersistenceError {
    PersistenceError::Pdf(format!("{:?}", e))
}

pub fn render_pdf(
    records: &[CanonicalRecord],
    generated_on: NaiveDate,
) -> Result<Vec<u8>, PersistenceError> {
    let rows = report_rows(records);
    let pages = paginate(&rows, FIRST_PAGE_ROWS, ROWS_PER_PAGE);
    let total_pages = pages.len();

    let (doc, first_page, first_layer) =
        PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?,
    };

    for (index, page_rows) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        let mut y = TOP;
        if index == 0 {
            y = draw_title_block(&layer, &fonts, records.len(), generated_on, y);
        }
        y = draw_header_row(&layer, &fonts, y);
        draw_rows(&layer, &fonts, page_rows, y);

        layer.use_text(
            page_footer(index + 1, total_pages, generated_on),
            FOOTER_SIZE,
            Mm(MARGIN_LEFT),
            Mm(FOOTER_Y),
            &fonts.regular,
        );
    }

    let bytes = doc.save_to_bytes().map_err(pdf_err)?;
    debug!("render_pdf rows={} pages={} bytes={}", rows.len(), total_pages, bytes.len());
    Ok(bytes)
}

pub fn export_pdf(
    records: &[CanonicalRecord],
    path: &Path,
    generated_on: NaiveDate,
) -> Result<(), PersistenceError> {
    let bytes = render_pdf(records, generated_on)?;
    fs::write(path, bytes)?;
    Ok(())
}

// ============================================================================
// DRAWING
// ============================================================================

fn draw_title_block(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    record_count: usize,
    generated_on: NaiveDate,
    mut y: f32,
) -> f32 {
    layer.use_text(REPORT_TITLE, TITLE_SIZE, Mm(MARGIN_LEFT), Mm(y), &fonts.bold);
    y -= LINE_HEIGHT * 1.6;
    layer.use_text(generated_label(generated_on), BODY_SIZE, Mm(MARGIN_LEFT), Mm(y), &fonts.regular);
    y -= LINE_HEIGHT;
    layer.use_text(record_count_label(record_count), BODY_SIZE, Mm(MARGIN_LEFT), Mm(y), &fonts.regular);
    y - LINE_HEIGHT * 1.6
}

fn draw_header_row(layer: &PdfLayerReference, fonts: &Fonts, y: f32) -> f32 {
    for (header, x) in REPORT_HEADERS.iter().zip(COLUMN_X) {
        layer.use_text(*header, BODY_SIZE, Mm(x), Mm(y), &fonts.bold);
    }
    y - LINE_HEIGHT
}

fn draw_rows(layer: &PdfLayerReference, fonts: &Fonts, rows: &[ReportRow], mut y: f32) {
    for row in rows {
        for (cell, x) in row.cells().iter().zip(COLUMN_X) {
            layer.use_text(truncate(cell), BODY_SIZE, Mm(x), Mm(y), &fonts.regular);
        }
        y -= LINE_HEIGHT;
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_CELL_CHARS - 3).collect();
    cut.push_str("...");
    cut
}
