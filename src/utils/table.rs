//! Table rendering utilities for CLI outputs.

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, width: usize, align: Align) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(header.chars().count()),
            align,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(cell.chars().count());
        }
        self.rows.push(row);
    }

    fn cell(col: &Column, value: &str) -> String {
        match col.align {
            Align::Left => format!("{:<width$}", value, width = col.width),
            Align::Right => format!("{:>width$}", value, width = col.width),
        }
    }

    fn line(&self, cells: impl Iterator<Item = String>) -> String {
        cells.collect::<Vec<_>>().join(" | ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header = self.line(self.columns.iter().map(|c| Self::cell(c, &c.header)));
        out.push_str(&header);
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width).sum::<usize>()
            + 3 * self.columns.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| Self::cell(col, row.get(i).map(String::as_str).unwrap_or("")));
            out.push_str(&self.line(cells));
            out.push('\n');
        }

        out
    }
}
