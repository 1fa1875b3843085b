//! Column-aligned listings.

/// Whitespace-aligned table; the last column is never padded.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            column_widths: headers.iter().map(|h| h.chars().count()).collect(),
        }
    }

    /// Add a row. Cells beyond the header count are dropped.
    pub fn add_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        let row: Vec<String> = row
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }

        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header and rows, one line each.
    pub fn render(&self) -> Vec<String> {
        std::iter::once(&self.headers)
            .chain(&self.rows)
            .map(|row| self.render_row(row))
            .collect()
    }

    fn render_row(&self, row: &[String]) -> String {
        let last = self.column_widths.len().saturating_sub(1);
        let mut line = String::new();

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            if i == last {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:width$}  ", cell, width = width));
            }
        }

        line.trim_end().to_string()
    }
}
