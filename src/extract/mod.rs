//! Layout extraction from ASCII-art drawings.
//!
//! Extraction runs in three stages:
//! 1. [`diff`] blanks the artwork shared with the reference drawing
//! 2. [`scan`] finds key index digit runs in the template residual
//! 3. [`harvest`] reads each key's symbol text from every layer residual

pub mod diff;
pub mod harvest;
pub mod scan;

pub use diff::{diff, Mismatch};
pub use harvest::harvest;
pub use scan::{check_bounds, scan};
