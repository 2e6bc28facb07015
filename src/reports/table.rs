use crate::extract::ExtractedRow;

/// A two-dimensional report: columns in first-seen order, rows in input order.
#[derive(Debug, Clone, Default)]
pub struct ReportTable {
    columns: Vec<String>,
    rows: Vec<ExtractedRow>,
}

impl ReportTable {
    /// Assemble a table from per-host rows, preserving row order and ordering
    /// columns by first appearance across the row sequence.
    #[must_use]
    pub fn from_rows(rows: Vec<ExtractedRow>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for column in row.columns() {
                if !columns.iter().any(|known| known == column) {
                    columns.push(column.to_string());
                }
            }
        }

        Self { columns, rows }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// A cell's value, or `None` when the row never carried the column.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
