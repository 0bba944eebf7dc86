//! Parsing of input files.
//!
//! This module reads the layer drawings into grids and decodes the
//! `keymap.json` configuration document.

pub mod grid;
pub mod keymap_json;

// Re-export commonly used functions
pub use grid::load_grid;
pub use keymap_json::parse_keymap_json;
