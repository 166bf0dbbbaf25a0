//! Table rendering utilities for CLI outputs.
//!
//! Column widths are computed from the visible width of every cell, so
//! coloured values line up with plain ones.

use crate::utils::formatting::{pad_right, visible_width};

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: Option<char>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width: visible_width(h),
                })
                .collect(),
            rows: Vec::new(),
            separator: None,
        }
    }

    /// Draw a rule line under the header using `c`.
    pub fn with_separator(mut self, c: char) -> Self {
        self.separator = Some(c);
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&c.header, c.width))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        if let Some(sep) = self.separator {
            let gaps = self.columns.len().saturating_sub(1);
            let total = self.columns.iter().map(|c| c.width).sum::<usize>() + gaps;
            out.push_str(&sep.to_string().repeat(total));
            out.push('\n');
        }

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    pad_right(cell, col.width)
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}
