//! Configuration for a keymap generation run.
//!
//! Two kinds of configuration live here: the keymap document (`keymap.json`)
//! that describes the keyboard, its layers and the output templates, and the
//! per-run [`GenerateOptions`] built from the command line.

use crate::constants::{KEYMAP_CONFIG_FILE, KEYMAP_C_FILE, LAYERS_H_FILE};
use crate::error::{KeymapError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Name and drawing file of one layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayerDescriptor {
    /// Layer name (C identifier)
    #[serde(default)]
    pub name: String,
    /// Drawing file, relative to the input folder
    #[serde(rename = "layer")]
    pub filename: String,
}

impl LayerDescriptor {
    /// Creates a descriptor.
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
        }
    }
}

/// The `keymap.json` document.
///
/// Field names follow the document's wire names, e.g. `layer.empty` for the
/// reference drawing and `keymap.c.layer` for the per-layer fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Total number of physical keys
    pub number_of_keys: usize,
    /// Symbol text to keycode
    #[serde(default)]
    pub symbol_to_keycode: HashMap<String, String>,
    /// Reference drawing: the bare keyboard artwork
    #[serde(rename = "layer.empty")]
    pub reference: LayerDescriptor,
    /// Template drawing: the artwork with key indices in each key cell
    #[serde(rename = "layer.template")]
    pub template: LayerDescriptor,
    /// Layers in output order
    #[serde(default)]
    pub layers: Vec<LayerDescriptor>,
    /// Lines written before the first layer in `keymap.c`
    #[serde(rename = "keymap.c.pre", default)]
    pub keymap_c_pre: Vec<String>,
    /// Lines rendered once per layer in `keymap.c`
    #[serde(rename = "keymap.c.layer", default)]
    pub keymap_c_layer: Vec<String>,
    /// Lines written after the last layer in `keymap.c`
    #[serde(rename = "keymap.c.post", default)]
    pub keymap_c_post: Vec<String>,
    /// Lines written before the layer enumerators in `layers.h`
    #[serde(rename = "layers.h.pre", default)]
    pub layers_h_pre: Vec<String>,
    /// Lines written after the layer enumerators in `layers.h`
    #[serde(rename = "layers.h.post", default)]
    pub layers_h_post: Vec<String>,
}

impl KeymapConfig {
    /// Checks structural rules the decoder cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError::Config`] for:
    /// - `number_of_keys` of zero
    /// - Missing reference or template file name
    /// - Layer names that are empty, duplicated, or not C identifiers
    pub fn validate(&self) -> Result<()> {
        if self.number_of_keys == 0 {
            return Err(KeymapError::Config(
                "number_of_keys must be greater than zero".to_string(),
            ));
        }

        if self.reference.filename.is_empty() {
            return Err(KeymapError::Config(
                "layer.empty must name a drawing file".to_string(),
            ));
        }

        if self.template.filename.is_empty() {
            return Err(KeymapError::Config(
                "layer.template must name a drawing file".to_string(),
            ));
        }

        let ident = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static regex");
        let mut seen = HashSet::new();
        for (idx, layer) in self.layers.iter().enumerate() {
            if !ident.is_match(&layer.name) {
                return Err(KeymapError::Config(format!(
                    "layers[{idx}].name '{}' is not a valid C identifier",
                    layer.name
                )));
            }
            if layer.filename.is_empty() {
                return Err(KeymapError::Config(format!(
                    "layers[{idx}] ('{}') must name a drawing file",
                    layer.name
                )));
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(KeymapError::Config(format!(
                    "layers[{idx}].name '{}' is used by more than one layer",
                    layer.name
                )));
            }
        }

        Ok(())
    }
}

/// What to do when a harvested symbol has no keycode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Emit the unresolved placeholder, warn, and finish the run
    #[default]
    Placeholder,
    /// Abort before writing anything
    Fail,
}

/// Options for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Folder containing `keymap.json` and the layer drawings
    pub input_dir: PathBuf,
    /// Folder that receives `keymap.c` and `layers.h`
    pub output_dir: PathBuf,
    /// Unresolved symbol handling
    pub policy: UnresolvedPolicy,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            policy: UnresolvedPolicy::default(),
        }
    }
}

impl GenerateOptions {
    /// Creates options for the given folders with the default policy.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            policy: UnresolvedPolicy::default(),
        }
    }

    /// Sets the unresolved symbol policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: UnresolvedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Path of the configuration document.
    pub fn config_path(&self) -> PathBuf {
        self.input_dir.join(KEYMAP_CONFIG_FILE)
    }

    /// Resolves a drawing file name against the input folder.
    pub fn input_path(&self, filename: impl AsRef<Path>) -> PathBuf {
        self.input_dir.join(filename)
    }

    /// Path of the generated `keymap.c`.
    pub fn keymap_c_path(&self) -> PathBuf {
        self.output_dir.join(KEYMAP_C_FILE)
    }

    /// Path of the generated `layers.h`.
    pub fn layers_h_path(&self) -> PathBuf {
        self.output_dir.join(LAYERS_H_FILE)
    }
}
