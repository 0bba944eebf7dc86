//! Character grid for ASCII-art keyboard drawings.

use crate::constants::BLANK;
use std::fmt;

/// An owned 2D character buffer.
///
/// Rows need not share a length. Cells are `char`s so that box-drawing
/// characters and other multi-byte glyphs occupy exactly one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Creates a grid from an iterator of text lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rows: lines
                .into_iter()
                .map(|line| line.as_ref().chars().collect())
                .collect(),
        }
    }

    /// Creates a grid from text, splitting on line endings.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns row `row`, if present.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the character at `(row, col)`, if inside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<char>] {
        &mut self.rows
    }

    /// Extracts `[start, end)` on `row`, padding with blanks where the grid
    /// is shorter than requested (missing rows read as entirely blank).
    pub fn span(&self, row: usize, start: usize, end: usize) -> String {
        let cells = self.row(row).unwrap_or(&[]);
        (start..end)
            .map(|col| cells.get(col).copied().unwrap_or(BLANK))
            .collect()
    }

    /// Returns true if every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|&c| c == BLANK)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
