//! Table formatting for CLI output.
//!
//! Columns are sized to their widest cell, measured in terminal columns so
//! translated text in wide scripts lines up.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a column may grow before cells are truncated.
const MAX_COLUMN_WIDTH: usize = 60;

/// A simple table formatter.
#[derive(Debug, Default)]
pub struct TableFormatter {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableFormatter {
    /// Create a new table formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column headers.
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Add a row to the table.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    fn calculate_widths(&self) -> Vec<usize> {
        let num_cols =
            self.rows.iter().map(Vec::len).chain(std::iter::once(self.headers.len())).max();
        let mut widths = vec![0usize; num_cols.unwrap_or(0)];

        for row in std::iter::once(&self.headers).chain(&self.rows) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width().min(MAX_COLUMN_WIDTH));
            }
        }

        widths
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.calculate_widths();
        let mut output = String::new();

        if !self.headers.is_empty() {
            output.push_str(&row_to_string(&self.headers, &widths));
            output.push('\n');
            let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            output.push_str(&sep.join("  "));
            output.push('\n');
        }

        for row in &self.rows {
            output.push_str(&row_to_string(row, &widths));
            output.push('\n');
        }

        output
    }
}

fn row_to_string(cells: &[String], widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(0);
            let cell_width = cell.width();

            if cell_width <= width {
                format!("{}{}", cell, " ".repeat(width - cell_width))
            } else {
                truncate(cell, width)
            }
        })
        .collect();

    parts.join("  ").trim_end().to_string()
}

/// Truncate a string to fit within a given width.
fn truncate(s: &str, max_width: usize) -> String {
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut width = 0;
    let mut chars = String::new();

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width + 3 > max_width {
            chars.push_str("...");
            break;
        }
        chars.push(c);
        width += char_width;
    }

    // Pad to exact width if needed
    let current_width = chars.width();
    if current_width < max_width {
        chars.push_str(&" ".repeat(max_width - current_width));
    }

    chars
}
