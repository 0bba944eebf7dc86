//! ASCII Keymap Generator Library
//!
//! This library turns ASCII-art drawings of a keyboard's layers into QMK
//! firmware sources. A reference drawing holds the bare keyboard artwork, a
//! template drawing numbers every key cell, and each layer drawing names the
//! function of each key. The pipeline diffs the drawings against the
//! reference, scans the template for key indices, harvests each key's symbol
//! text per layer, resolves symbols to keycodes, and renders `keymap.c` and
//! `layers.h` from template fragments in `keymap.json`.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod firmware;
pub mod models;
pub mod parser;
pub mod services;

pub use error::{KeymapError, Result};
