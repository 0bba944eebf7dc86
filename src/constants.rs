//! Application-wide constants.
//!
//! This module defines the application name, the file names the pipeline
//! reads and writes, and the placeholder token formats used by the
//! template fragments in `keymap.json`.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "ASCII Keymap Generator";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "asciimap";

/// Name of the configuration document inside the input folder.
pub const KEYMAP_CONFIG_FILE: &str = "keymap.json";

/// Name of the generated key-assignment table.
pub const KEYMAP_C_FILE: &str = "keymap.c";

/// Name of the generated layer enumeration header.
pub const LAYERS_H_FILE: &str = "layers.h";

/// Token replaced by the layer name in `keymap.c.layer` fragments.
pub const LAYER_NAME_TOKEN: &str = "${LAYER_NAME}";

/// Prefix of a key-index placeholder token (`____007____`).
pub const KEY_TOKEN_PREFIX: &str = "____";

/// Suffix of a key-index placeholder token.
pub const KEY_TOKEN_SUFFIX: &str = "____";

/// Zero-padded width of the key index inside a placeholder token.
pub const KEY_INDEX_WIDTH: usize = 3;

/// Output code for keys the template never mentions.
pub const TRANSPARENT_KEYCODE: &str = "KC_TRANS";

/// Output code for keys whose symbol has no entry in the symbol table.
pub const UNRESOLVED_KEYCODE: &str = "????";

/// The blank cell character.
pub const BLANK: char = ' ';
