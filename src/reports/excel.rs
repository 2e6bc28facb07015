//! Excel report generation.

use crate::Result;
use crate::reports::ReportTable;
use rust_xlsxwriter::{Format, Workbook};
use std::io::Write;

/// Generate an Excel report for the snapshot table to a writer
///
/// # Errors
///
/// Returns an error if the Excel file cannot be created or written
#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
pub fn generate<W: Write>(table: &ReportTable, writer: &mut W) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let bold = Format::new().set_bold();
    for (col, column) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, u16::try_from(col)?, column, &bold)?;
    }

    for row in 0..table.row_count() {
        let r = u32::try_from(row + 1)?;
        for (col, column) in table.columns().iter().enumerate() {
            worksheet.write_string(r, u16::try_from(col)?, table.cell(row, column).unwrap_or(""))?;
        }
    }

    let buffer = workbook.save_to_buffer()?;
    writer.write_all(&buffer)?;
    Ok(())
}
