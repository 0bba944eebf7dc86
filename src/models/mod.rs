//! Data models for grids, layers, and keys.
//!
//! Models are plain data; the pipeline stages in `extract` and `firmware`
//! operate on them.

pub mod grid;
pub mod layer;

// Re-export all model types
pub use grid::Grid;
pub use layer::{slot_output_code, Footprint, Key, KeySlot, Layer, Resolution};
