//! Layer and key data structures.

use crate::constants::{TRANSPARENT_KEYCODE, UNRESOLVED_KEYCODE};
use crate::models::Grid;
use serde::Serialize;

/// Location of one digit run in the template drawing.
///
/// `[col_start, col_end)` on `row` is the cell span the key occupies. The
/// same `index` may appear in several footprints for keys drawn across
/// more than one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Footprint {
    /// Key index parsed from the digit run
    pub index: usize,
    /// 0-based row
    pub row: usize,
    /// First column of the run
    pub col_start: usize,
    /// One past the last column of the run
    pub col_end: usize,
}

impl Footprint {
    /// Creates a footprint.
    #[must_use]
    pub const fn new(index: usize, row: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            index,
            row,
            col_start,
            col_end,
        }
    }

    /// Number of columns covered.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.col_end - self.col_start
    }
}

/// Outcome of looking a key's symbol up in the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "keycode", rename_all = "snake_case")]
pub enum Resolution {
    /// Not looked up yet
    #[default]
    Pending,
    /// Symbol mapped to this keycode
    Resolved(String),
    /// Symbol missing from the table
    Unresolved,
}

/// A key discovered in the template, with the text harvested for it on one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    /// Key index
    pub index: usize,
    /// Concatenated, whitespace-free text from every footprint of this key
    pub symbol: String,
    /// Lookup result
    pub resolution: Resolution,
}

impl Key {
    /// Creates a freshly discovered key.
    pub fn new(index: usize, symbol: impl Into<String>) -> Self {
        Self {
            index,
            symbol: symbol.into(),
            resolution: Resolution::Pending,
        }
    }

    /// The code written into the generated source for this key.
    pub fn output_code(&self) -> &str {
        match &self.resolution {
            Resolution::Resolved(code) => code,
            Resolution::Pending | Resolution::Unresolved => UNRESOLVED_KEYCODE,
        }
    }
}

/// A key slot: `None` until the template scan discovers the index.
pub type KeySlot = Option<Key>;

/// Output code for a slot; undiscovered slots are transparent.
pub fn slot_output_code(slot: &KeySlot) -> &str {
    slot.as_ref().map_or(TRANSPARENT_KEYCODE, Key::output_code)
}

/// One logical keymap layer.
///
/// # Invariants
///
/// - `keys.len()` equals the configured key count
/// - `keys[i]`, when present, has `index == i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Layer name, used as the C enumerator and substituted into templates
    pub name: String,
    /// Drawing file name, relative to the input folder
    pub filename: String,
    /// Residual drawing (reference characters blanked out)
    pub grid: Grid,
    /// Dense key table indexed by key index
    pub keys: Vec<KeySlot>,
}

impl Layer {
    /// Creates a layer with every slot undiscovered.
    pub fn new(
        name: impl Into<String>,
        filename: impl Into<String>,
        grid: Grid,
        number_of_keys: usize,
    ) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            grid,
            keys: vec![None; number_of_keys],
        }
    }

    /// Returns the key at `index` if it was discovered.
    pub fn key(&self, index: usize) -> Option<&Key> {
        self.keys.get(index).and_then(Option::as_ref)
    }

    /// Iterates over discovered keys in index order.
    pub fn discovered(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter().flatten()
    }

    /// Output code for key `index` (transparent when undiscovered).
    pub fn output_code(&self, index: usize) -> &str {
        self.keys
            .get(index)
            .map_or(TRANSPARENT_KEYCODE, slot_output_code)
    }
}
