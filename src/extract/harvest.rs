//! Symbol harvester: collects each key's symbol text from the layer drawings.

use crate::models::{Footprint, Key, Layer};

/// Collects the text under every footprint into the matching key of every layer.
///
/// The first footprint of an index discovers the key; later footprints append
/// to it, so a symbol split across regions reads in scan order. Whitespace is
/// removed from each span. Cells missing from a layer's drawing read as blank.
///
/// # Panics
///
/// Panics if a footprint index is not below a layer's key count. Callers
/// check this with [`super::scan::check_bounds`] first.
pub fn harvest(layers: &mut [Layer], footprints: &[Footprint]) {
    for footprint in footprints {
        for layer in layers.iter_mut() {
            let text = harvest_span(layer, footprint);
            match &mut layer.keys[footprint.index] {
                Some(key) => key.symbol.push_str(&text),
                slot => *slot = Some(Key::new(footprint.index, text)),
            }
        }
    }
}

fn harvest_span(layer: &Layer, footprint: &Footprint) -> String {
    layer
        .grid
        .span(footprint.row, footprint.col_start, footprint.col_end)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
