// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, record_to_row};
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const ID_COLUMN: u16 = 0;
const STATUS_COLUMN: usize = 6;

/// XLSX export with a coloured header, banded rows and auto-sized columns.
pub(crate) fn export_xlsx(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Prospects").map_err(to_export_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in record_to_row(rec).iter().enumerate() {
            let v = value.as_str();
            let font = (col == STATUS_COLUMN).then(|| status_color(v)).flatten();
            write_cell(worksheet, row, col as u16, v, band, font)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        // URL columns can get very long
        let width = (*w).min(60) as f64 + 2.0;
        worksheet
            .set_column_width(c as u16, width)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn status_color(label: &str) -> Option<Color> {
    match label {
        "Found" => Some(Color::RGB(0x1E7B34)),
        "Not Met" => Some(Color::RGB(0xC0392B)),
        "Pending" => Some(Color::RGB(0xB7791F)),
        _ => None,
    }
}

/// Write one cell: the id as a right-aligned number, everything else as text.
fn write_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    font: Option<Color>,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some(color) = font {
        fmt = fmt.set_font_color(color).set_bold();
    }

    if let Some(num) = numeric_cell(col, s) {
        let fmt = fmt.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_export_error)?;
    Ok(())
}

/// Only the id column is numeric; imported text such as "00123" stays text.
fn numeric_cell(col: u16, s: &str) -> Option<f64> {
    if col != ID_COLUMN {
        return None;
    }
    s.parse::<u64>().ok().map(|n| n as f64)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::numeric_cell;

    #[test]
    fn id_column_is_written_as_number() {
        assert_eq!(numeric_cell(0, "42"), Some(42.0));
        assert_eq!(numeric_cell(0, "n/a"), None);
    }

    #[test]
    fn digits_outside_id_column_stay_text() {
        assert_eq!(numeric_cell(1, "00123"), None);
        assert_eq!(numeric_cell(3, "1999"), None);
    }
}
