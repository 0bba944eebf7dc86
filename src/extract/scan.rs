//! Key-region scanner: finds key index digit runs in the template residual.

use crate::error::{KeymapError, Result};
use crate::models::{Footprint, Grid};
use tracing::debug;

/// Scans `template` row by row, left to right, for maximal runs of ASCII digits.
///
/// Each run becomes one [`Footprint`]. Runs never overlap, and a run that
/// ends at the end of its row is still complete. Repeated indices are kept
/// in encounter order.
///
/// # Errors
///
/// Returns [`KeymapError::MalformedIndex`] if a run does not fit in `usize`.
pub fn scan(template: &Grid) -> Result<Vec<Footprint>> {
    let mut footprints = Vec::new();

    for (row, cells) in template.rows().enumerate() {
        let mut col = 0;
        while col < cells.len() {
            if !cells[col].is_ascii_digit() {
                col += 1;
                continue;
            }

            let start = col;
            while col < cells.len() && cells[col].is_ascii_digit() {
                col += 1;
            }

            let text: String = cells[start..col].iter().collect();
            let index = text.parse::<usize>().map_err(|_| KeymapError::MalformedIndex {
                row,
                column: start,
                text: text.clone(),
            })?;

            debug!(index, row, col_start = start, col_end = col, "found key index '{text}'");
            footprints.push(Footprint::new(index, row, start, col));
        }
    }

    Ok(footprints)
}

/// Checks that every footprint index is below `number_of_keys`.
///
/// # Errors
///
/// Returns [`KeymapError::KeyIndexOutOfRange`] for the first offending footprint.
pub fn check_bounds(footprints: &[Footprint], number_of_keys: usize) -> Result<()> {
    match footprints.iter().find(|fp| fp.index >= number_of_keys) {
        Some(fp) => Err(KeymapError::KeyIndexOutOfRange {
            index: fp.index,
            row: fp.row,
            column: fp.col_start,
            number_of_keys,
        }),
        None => Ok(()),
    }
}
