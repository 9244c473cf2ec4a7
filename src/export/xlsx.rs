use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use unicode_width::UnicodeWidthStr;

use crate::error::AppResult;

/// Sheet name used by the export endpoint
const SHEET_NAME: &str = "Activities";

/// Serializes a cell grid into an XLSX workbook held in memory.
pub fn write_workbook(grid: &[Vec<String>]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut col_widths: Vec<usize> = Vec::new();

    for (row_index, row) in grid.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if col_widths.len() <= col {
                col_widths.push(0);
            }
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));

            if row_index == 0 {
                worksheet.write_with_format(0, col as u16, value.as_str(), &header_format)?;
            } else {
                worksheet.write(row_index as u32, col as u16, value.as_str())?;
            }
        }
    }

    worksheet.set_freeze_panes(1, 0).ok();

    for (col, width) in col_widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64 + 2.0)?;
    }

    Ok(workbook.save_to_buffer()?)
}
