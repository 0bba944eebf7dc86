//! `keymap.json` decoding.

use crate::config::KeymapConfig;
use crate::error::{KeymapError, Result};
use std::path::Path;

/// Reads and validates a keymap configuration document.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or unreadable ([`KeymapError::Io`])
/// - Malformed JSON or wrong field types ([`KeymapError::Decode`])
/// - Structural problems found by [`KeymapConfig::validate`]
pub fn parse_keymap_json(path: &Path) -> Result<KeymapConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::io(path, e))?;
    let config = parse_keymap_json_str(&content).map_err(|source| KeymapError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Decodes a keymap configuration document from a string without validating it.
pub fn parse_keymap_json_str(content: &str) -> serde_json::Result<KeymapConfig> {
    serde_json::from_str(content)
}
