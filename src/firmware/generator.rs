//! Template renderer for `keymap.c` and `layers.h`.
//!
//! The output is assembled from the literal line fragments in `keymap.json`.
//! Per-layer fragments contain two kinds of placeholder:
//!
//! - `${LAYER_NAME}`: replaced by the layer name
//! - `____NNN____`: replaced by the keycode of key `NNN` (zero-padded),
//!   right-aligned to the token's width so hand-formatted columns line up

use crate::config::KeymapConfig;
use crate::constants::{KEY_INDEX_WIDTH, KEY_TOKEN_PREFIX, KEY_TOKEN_SUFFIX, LAYER_NAME_TOKEN};
use crate::models::Layer;

/// Builds the placeholder token for key `index`, e.g. `____007____`.
pub fn key_token(index: usize) -> String {
    format!("{KEY_TOKEN_PREFIX}{index:0KEY_INDEX_WIDTH$}{KEY_TOKEN_SUFFIX}")
}

/// Left-pads `code` with spaces to at least `width` characters.
pub fn pad_code(code: &str, width: usize) -> String {
    format!("{code:>width$}")
}

/// Renders the per-layer fragment for one layer.
///
/// Substitution is purely textual: every occurrence of a token, on every
/// line, receives the same replacement.
pub fn render_layer(template: &[String], layer: &Layer) -> Vec<String> {
    let mut lines: Vec<String> = template
        .iter()
        .map(|line| line.replace(LAYER_NAME_TOKEN, &layer.name))
        .collect();

    for index in 0..layer.keys.len() {
        let token = key_token(index);
        if !lines.iter().any(|line| line.contains(&token)) {
            continue;
        }
        let code = pad_code(layer.output_code(index), token.chars().count());
        for line in &mut lines {
            if line.contains(&token) {
                *line = line.replace(&token, &code);
            }
        }
    }

    lines
}

/// Formats one `layers.h` enumerator.
pub fn layer_enumerator(name: &str, ordinal: usize) -> String {
    format!("    {name} = {ordinal},")
}

/// Generates the two output artifacts from resolved layers.
///
/// # Examples
///
/// ```
/// use asciimap::config::KeymapConfig;
/// use asciimap::firmware::FirmwareGenerator;
/// use asciimap::models::{Grid, Layer};
///
/// let config = KeymapConfig {
///     layers_h_pre: vec!["enum layers {".to_string()],
///     layers_h_post: vec!["};".to_string()],
///     ..KeymapConfig::default()
/// };
/// let layers = vec![Layer::new("BASE", "base.txt", Grid::default(), 1)];
/// let generator = FirmwareGenerator::new(&config, &layers);
///
/// assert_eq!(generator.generate_layers_h(), "enum layers {\n    BASE = 0,\n};\n");
/// ```
pub struct FirmwareGenerator<'a> {
    config: &'a KeymapConfig,
    layers: &'a [Layer],
}

impl<'a> FirmwareGenerator<'a> {
    /// Creates a generator over the configuration fragments and resolved layers.
    pub const fn new(config: &'a KeymapConfig, layers: &'a [Layer]) -> Self {
        Self { config, layers }
    }

    /// Lines of `keymap.c`: pre, each rendered layer in order, post.
    pub fn keymap_c_lines(&self) -> Vec<String> {
        let mut lines = self.config.keymap_c_pre.clone();
        for layer in self.layers {
            lines.extend(render_layer(&self.config.keymap_c_layer, layer));
        }
        lines.extend(self.config.keymap_c_post.iter().cloned());
        lines
    }

    /// Lines of `layers.h`: pre, one enumerator per layer, post.
    pub fn layers_h_lines(&self) -> Vec<String> {
        let mut lines = self.config.layers_h_pre.clone();
        lines.extend(
            self.layers
                .iter()
                .enumerate()
                .map(|(ordinal, layer)| layer_enumerator(&layer.name, ordinal)),
        );
        lines.extend(self.config.layers_h_post.iter().cloned());
        lines
    }

    /// Full text of `keymap.c`, every line newline-terminated.
    pub fn generate_keymap_c(&self) -> String {
        join_lines(&self.keymap_c_lines())
    }

    /// Full text of `layers.h`, every line newline-terminated.
    pub fn generate_layers_h(&self) -> String {
        join_lines(&self.layers_h_lines())
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut output = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}
