//! Table types.

use super::{Alignment, Paragraph};
use crate::error::ConstructionError;
use serde::Serialize;

/// A fixed-structure grid.
///
/// Rows are validated at construction: at least one row, and every row has
/// the same number of cells as the first. A table is atomic for pagination
/// and is charged `estimated_lines` against the page budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Rows in the table
    rows: Vec<TableRow>,

    /// Column widths in twips (optional)
    pub column_widths: Option<Vec<u32>>,

    /// Lines this table consumes on a numbered page
    pub estimated_lines: u8,
}

impl Table {
    /// Create a table from rows, checking its shape.
    pub fn new(rows: Vec<TableRow>) -> Result<Self, ConstructionError> {
        let expected = rows
            .first()
            .map(|r| r.cells.len())
            .ok_or(ConstructionError::EmptyTable)?;

        for (row, r) in rows.iter().enumerate() {
            if r.cells.is_empty() {
                return Err(ConstructionError::EmptyRow { row });
            }
            if r.cells.len() != expected {
                return Err(ConstructionError::RaggedRow {
                    row,
                    expected,
                    found: r.cells.len(),
                });
            }
        }

        Ok(Self {
            rows,
            column_widths: None,
            estimated_lines: 1,
        })
    }

    /// Set column widths and return self.
    pub fn with_column_widths(mut self, widths: Vec<u32>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    /// Set the estimated line count and return self.
    pub fn with_estimated_lines(mut self, lines: u8) -> Self {
        self.estimated_lines = lines;
        self
    }

    /// Get the rows.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// Cell border flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellBorders {
    /// Top border
    pub top: bool,
    /// Right border
    pub right: bool,
    /// Bottom border
    pub bottom: bool,
    /// Left border
    pub left: bool,
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub content: Vec<Paragraph>,

    /// Cell alignment
    pub alignment: Alignment,

    /// Borders drawn around the cell
    pub borders: CellBorders,
}

impl TableCell {
    /// Create a new cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(vec![Paragraph::with_text(text)])
    }

    /// Create a cell with multiple paragraphs.
    pub fn with_content(content: Vec<Paragraph>) -> Self {
        Self {
            content,
            alignment: Alignment::Left,
            borders: CellBorders::default(),
        }
    }

    /// Set borders and return self.
    pub fn bordered(mut self, borders: CellBorders) -> Self {
        self.borders = borders;
        self
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
