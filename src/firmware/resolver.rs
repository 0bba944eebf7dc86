//! Code resolver: maps harvested symbol text to keycodes.
//!
//! Every discovered key is looked up once. Misses are collected into a
//! [`ResolutionReport`] rather than stopping at the first one, so a single
//! run shows every symbol that needs a table entry.

use crate::models::{Layer, Resolution};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// A key whose symbol text is missing from the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedSymbol {
    /// Layer name
    pub layer: String,
    /// Position of the layer in the layer list
    pub layer_index: usize,
    /// Key index
    pub key: usize,
    /// Harvested symbol text
    pub symbol: String,
}

impl fmt::Display for UnresolvedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Layer {} ({})] key {}: no keycode for symbol '{}'",
            self.layer_index, self.layer, self.key, self.symbol
        )
    }
}

/// Unresolved symbols from one or more layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    /// Every miss, in layer then key order
    pub unresolved: Vec<UnresolvedSymbol>,
}

impl ResolutionReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unresolved: Vec::new(),
        }
    }

    /// Returns true if every symbol resolved.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Number of unresolved symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.unresolved.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Appends the entries of another report.
    pub fn merge(&mut self, other: Self) {
        self.unresolved.extend(other.unresolved);
    }

    /// Distinct symbols that need a table entry, sorted.
    pub fn missing_symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.unresolved.iter().map(|u| u.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        symbols
    }

    /// Formats the report as a numbered list.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();
        for (idx, entry) in self.unresolved.iter().enumerate() {
            message.push_str(&format!("  {}. {}\n", idx + 1, entry));
        }
        message
    }
}

/// Resolves every discovered key of `layer` against `table`.
///
/// Hits become [`Resolution::Resolved`]; misses become
/// [`Resolution::Unresolved`] and are returned in the report. Undiscovered
/// slots are never looked up.
pub fn resolve(
    layer: &mut Layer,
    layer_index: usize,
    table: &HashMap<String, String>,
) -> ResolutionReport {
    let mut report = ResolutionReport::new();

    for key in layer.keys.iter_mut().flatten() {
        key.resolution = match table.get(&key.symbol) {
            Some(code) => Resolution::Resolved(code.clone()),
            None => {
                warn!(
                    layer = %layer.name,
                    key = key.index,
                    "no keycode for symbol '{}'",
                    key.symbol
                );
                report.unresolved.push(UnresolvedSymbol {
                    layer: layer.name.clone(),
                    layer_index,
                    key: key.index,
                    symbol: key.symbol.clone(),
                });
                Resolution::Unresolved
            }
        };
    }

    report
}

/// Resolves every layer in order and returns the combined report.
pub fn resolve_all(layers: &mut [Layer], table: &HashMap<String, String>) -> ResolutionReport {
    let mut report = ResolutionReport::new();
    for (idx, layer) in layers.iter_mut().enumerate() {
        report.merge(resolve(layer, idx, table));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{TRANSPARENT_KEYCODE, UNRESOLVED_KEYCODE};
    use crate::models::{Grid, Key};

    fn table() -> HashMap<String, String> {
        HashMap::from([
            ("a".to_string(), "KC_A".to_string()),
            ("b".to_string(), "KC_B".to_string()),
        ])
    }

    fn layer_with(name: &str, symbols: &[(usize, &str)], keys: usize) -> Layer {
        let mut layer = Layer::new(name, "x.txt", Grid::default(), keys);
        for &(index, symbol) in symbols {
            layer.keys[index] = Some(Key::new(index, symbol));
        }
        layer
    }

    #[test]
    fn test_resolve_hits() {
        let mut layer = layer_with("BASE", &[(0, "a"), (1, "b")], 2);
        let report = resolve(&mut layer, 0, &table());

        assert!(report.is_clean());
        assert_eq!(layer.output_code(0), "KC_A");
        assert_eq!(layer.output_code(1), "KC_B");
    }

    #[test]
    fn test_resolve_miss_is_reported_and_marked() {
        let mut layer = layer_with("NUM", &[(0, "a"), (2, "zz")], 3);
        let report = resolve(&mut layer, 1, &table());

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.unresolved[0],
            UnresolvedSymbol {
                layer: "NUM".to_string(),
                layer_index: 1,
                key: 2,
                symbol: "zz".to_string(),
            }
        );
        assert_eq!(layer.key(2).unwrap().resolution, Resolution::Unresolved);
        assert_eq!(layer.output_code(2), UNRESOLVED_KEYCODE);
    }

    #[test]
    fn test_resolve_skips_undiscovered_slots() {
        let mut layer = layer_with("BASE", &[(1, "a")], 3);
        let report = resolve(&mut layer, 0, &table());

        assert!(report.is_clean());
        assert!(layer.key(0).is_none());
        assert_eq!(layer.output_code(0), TRANSPARENT_KEYCODE);
        assert_eq!(layer.output_code(2), TRANSPARENT_KEYCODE);
    }

    #[test]
    fn test_resolve_all_collects_every_layer() {
        let mut layers = vec![
            layer_with("BASE", &[(0, "q")], 1),
            layer_with("NUM", &[(0, "q")], 1),
        ];
        let report = resolve_all(&mut layers, &table());

        assert_eq!(report.len(), 2);
        assert_eq!(report.unresolved[0].layer, "BASE");
        assert_eq!(report.unresolved[1].layer_index, 1);
        assert_eq!(report.missing_symbols(), vec!["q"]);
    }

    #[test]
    fn test_format_message_is_numbered() {
        let mut layer = layer_with("BASE", &[(0, "x"), (1, "y")], 2);
        let report = resolve(&mut layer, 0, &table());
        let message = report.format_message();

        assert!(message.contains("  1. [Layer 0 (BASE)] key 0: no keycode for symbol 'x'"));
        assert!(message.contains("  2. [Layer 0 (BASE)] key 1"));
    }
}
