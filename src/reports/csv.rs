use crate::Result;
use crate::reports::ReportTable;
use core::fmt::Write;
use std::borrow::Cow;

/// Generate a CSV rendering of the snapshot table: a header row of column
/// names, then one row per host. Cells for columns a row never carried are
/// left empty.
pub fn generate<W: Write>(table: &ReportTable, writer: &mut W) -> Result<()> {
    for (index, column) in table.columns().iter().enumerate() {
        if index > 0 {
            write!(writer, ",")?;
        }
        write!(writer, "{}", escape_csv(column))?;
    }
    writeln!(writer)?;

    for row in 0..table.row_count() {
        for (index, column) in table.columns().iter().enumerate() {
            if index > 0 {
                write!(writer, ",")?;
            }
            write!(writer, "{}", escape_csv(table.cell(row, column).unwrap_or("")))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
