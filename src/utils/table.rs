//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.width(),
        }
    }
}

/// A cell keeps its plain text for width computation and an optional
/// styled rendering (ANSI escapes do not count towards the width).
pub struct Cell {
    pub text: String,
    pub styled: Option<String>,
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, styled: None }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.text.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, &col.header, col.width));
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (col, cell) in self.columns.iter().zip(row) {
                let shown = cell.styled.as_deref().unwrap_or(&cell.text);
                out.push_str(&pad(shown, &cell.text, col.width));
            }
            out.push('\n');
        }

        out
    }
}

fn pad(shown: &str, plain: &str, width: usize) -> String {
    let fill = width.saturating_sub(plain.width());
    format!("{}{} ", shown, " ".repeat(fill))
}
