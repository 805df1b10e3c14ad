//! Table rendering utilities for CLI outputs.
//!
//! Cells may carry ANSI color codes; widths are computed on the stripped
//! text using display widths, so colored and wide-character cells line up.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>, min_width: usize) -> Self {
        Self {
            header: header.into(),
            min_width,
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    wrap: Option<(usize, usize)>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            wrap: None,
        }
    }

    /// Wrap one column (by index) at a maximum display width; continuation
    /// lines keep every other cell empty.
    pub fn wrap_column(mut self, index: usize, max_width: usize) -> Self {
        self.wrap = Some((index, max_width));
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    fn cell_width(cell: &str) -> usize {
        strip_ansi(cell).width()
    }

    /// Expand rows whose wrapped column overflows into continuation rows.
    fn expanded_rows(&self) -> Vec<Vec<String>> {
        let Some((wrap_idx, max_w)) = self.wrap else {
            return self.rows.clone();
        };

        let mut out = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let text = &row[wrap_idx];
            if Self::cell_width(text) <= max_w {
                out.push(row.clone());
                continue;
            }
            let stripped = strip_ansi(text);
            let lines = textwrap::wrap(&stripped, max_w);
            for (i, line) in lines.iter().enumerate() {
                if i == 0 {
                    let mut first = row.clone();
                    first[wrap_idx] = line.to_string();
                    out.push(first);
                } else {
                    let mut cont = vec![String::new(); self.columns.len()];
                    cont[wrap_idx] = line.to_string();
                    out.push(cont);
                }
            }
        }
        out
    }

    pub fn render(&self) -> String {
        let rows = self.expanded_rows();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                rows.iter()
                    .map(|r| Self::cell_width(&r[i]))
                    .chain([col.header.width(), col.min_width])
                    .max()
                    .unwrap_or(col.min_width)
            })
            .collect();

        let mut out = String::new();

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&col.header);
            out.push_str(&" ".repeat(widths[i] - col.header.width() + 2));
        }
        out.push('\n');

        // Separator
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(cell);
                out.push_str(&" ".repeat(widths[i] - Self::cell_width(cell) + 2));
            }
            while out.ends_with(' ') {
                out.pop();
            }
            out.push('\n');
        }

        out
    }
}
