//! Grid differ: strips the shared keyboard artwork from a drawing.
//!
//! Every layer drawing repeats the same borders and labels as the reference
//! drawing. Diffing blanks those cells so later stages only see what is
//! unique to the layer.

use crate::constants::BLANK;
use crate::error::KeymapError;
use crate::models::Grid;
use std::fmt;

/// A reference cell that the subject drawing does not reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// 0-based row
    pub row: usize,
    /// 0-based column
    pub column: usize,
    /// Reference character
    pub expected: char,
    /// Subject character
    pub found: char,
}

impl Mismatch {
    /// Attaches the subject's file name, producing a pipeline error.
    pub fn in_file(self, file: impl Into<String>) -> KeymapError {
        KeymapError::Mismatch {
            file: file.into(),
            row: self.row,
            column: self.column,
            expected: self.expected,
            found: self.found,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "character mismatch at line {}, character {}: expected '{}', found '{}'",
            self.row, self.column, self.expected, self.found
        )
    }
}

impl std::error::Error for Mismatch {}

/// Returns the residual of `subject` after removing `reference`.
///
/// Cells are compared only where both grids have them; the tail of a longer
/// row or grid is left as is.
///
/// # Errors
///
/// Returns the first [`Mismatch`] in row-major order where the reference
/// cell is non-blank and the subject cell differs.
pub fn diff(reference: &Grid, subject: &Grid) -> Result<Grid, Mismatch> {
    let mut residual = subject.clone();
    diff_in_place(reference, &mut residual)?;
    Ok(residual)
}

/// In-place form of [`diff`]. On error `subject` may be partially blanked.
pub fn diff_in_place(reference: &Grid, subject: &mut Grid) -> Result<(), Mismatch> {
    for (row, (expected_row, subject_row)) in
        reference.rows().zip(subject.rows_mut().iter_mut()).enumerate()
    {
        for (column, (&expected, cell)) in
            expected_row.iter().zip(subject_row.iter_mut()).enumerate()
        {
            if expected == *cell {
                *cell = BLANK;
            } else if expected != BLANK {
                return Err(Mismatch {
                    row,
                    column,
                    expected,
                    found: *cell,
                });
            }
        }
    }

    Ok(())
}
