//! Layer drawing loading.

use crate::error::{KeymapError, Result};
use crate::models::Grid;
use std::path::Path;

/// Reads a drawing file into a [`Grid`], one row per line.
///
/// Line endings (`\n` or `\r\n`) are stripped; nothing else is trimmed, so
/// trailing blanks stay part of the row.
///
/// # Errors
///
/// Returns [`KeymapError::Io`] if the file is missing or unreadable.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::io(path, e))?;
    Ok(Grid::parse(&content))
}
