//! Table rendering utilities for CLI outputs.

use super::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>) -> Self {
        let header = header.into();
        let width = super::formatting::visible_width(&header);
        Self { header, width }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns to fit its (visible) content.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(super::formatting::visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
