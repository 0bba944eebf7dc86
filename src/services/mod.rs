//! Service layer for business logic.
//!
//! This module contains services that coordinate the parsing, extraction,
//! resolution, and generation stages into complete runs.

pub mod keymap;

// Re-export commonly used types
pub use keymap::{Artifacts, GenerateOutcome, Keymap, KeymapService};
