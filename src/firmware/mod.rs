//! Keycode resolution and firmware source generation.
//!
//! This module turns harvested symbol text into keycodes and renders the
//! `keymap.c` and `layers.h` artifacts from the configured templates.

pub mod generator;
pub mod resolver;

// Re-export firmware types
pub use generator::FirmwareGenerator;
pub use resolver::{resolve, resolve_all, ResolutionReport, UnresolvedSymbol};
