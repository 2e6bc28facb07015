//! Multi-format report generation for fleet snapshots
//!
//! Report generation happens in two steps. [`ReportTable`] assembles the
//! per-host rows into a rectangular table: columns are the union of row keys
//! ordered by first appearance, rows keep their input order, and a column a
//! row never carried renders as an empty cell, which is distinct from a
//! metric that was checked and reported as `N/A`.
//!
//! Three generators consume the assembled table, each through a `generate`
//! function:
//! - **Excel**: native .xlsx with a bold header row
//! - **CSV**: spreadsheet-compatible format with proper escaping
//! - **Console**: per-host terminal output with optional ANSI styling

mod console;
mod csv;
mod excel;
mod table;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use excel::generate as generate_xlsx;
pub use table::ReportTable;
