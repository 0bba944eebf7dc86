//! Keymap generation service.
//!
//! This module wires the pipeline stages together:
//! load → diff → scan → harvest → resolve → render → write.
//! The in-memory part ([`KeymapService::build`]) takes grids directly so it
//! can be driven without touching the file system.

use crate::config::{GenerateOptions, KeymapConfig, UnresolvedPolicy};
use crate::error::{KeymapError, Result};
use crate::extract;
use crate::firmware::{resolve_all, FirmwareGenerator, ResolutionReport};
use crate::models::{Footprint, Grid, Layer};
use crate::parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A fully extracted and resolved keymap.
#[derive(Debug, Clone)]
pub struct Keymap {
    /// The configuration it was built from
    pub config: KeymapConfig,
    /// Key regions found in the template, in scan order
    pub footprints: Vec<Footprint>,
    /// Layers in output order, keys resolved
    pub layers: Vec<Layer>,
    /// Symbols missing from the symbol table
    pub report: ResolutionReport,
}

impl Keymap {
    /// Distinct key indices found in the template, ascending.
    pub fn discovered_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.footprints.iter().map(|fp| fp.index).collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// Applies the unresolved-symbol policy.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError::Unresolved`] under [`UnresolvedPolicy::Fail`]
    /// when any symbol is unresolved.
    pub fn enforce(&self, policy: UnresolvedPolicy) -> Result<()> {
        match policy {
            UnresolvedPolicy::Fail if !self.report.is_clean() => {
                Err(KeymapError::Unresolved(self.report.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Renders both artifacts.
    pub fn render(&self) -> Artifacts {
        let generator = FirmwareGenerator::new(&self.config, &self.layers);
        Artifacts {
            keymap_c: generator.generate_keymap_c(),
            layers_h: generator.generate_layers_h(),
        }
    }
}

/// Rendered output text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Contents of `keymap.c`
    pub keymap_c: String,
    /// Contents of `layers.h`
    pub layers_h: String,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// The resolved keymap
    pub keymap: Keymap,
    /// Files written, empty on a dry run
    pub written: Vec<PathBuf>,
}

/// Service running the keymap pipeline.
pub struct KeymapService;

impl KeymapService {
    /// Extracts and resolves a keymap from already-loaded drawings.
    ///
    /// `layer_grids` must hold one grid per entry of `config.layers`, in
    /// the same order.
    ///
    /// # Errors
    ///
    /// Returns errors for:
    /// - A grid count that differs from the number of configured layers
    /// - Template or layer drawings that contradict the reference
    /// - Malformed or out-of-range key indices in the template
    pub fn build(
        config: KeymapConfig,
        reference: &Grid,
        template: &Grid,
        layer_grids: Vec<Grid>,
    ) -> Result<Keymap> {
        if layer_grids.len() != config.layers.len() {
            return Err(KeymapError::Config(format!(
                "expected {} layer drawing(s), got {}",
                config.layers.len(),
                layer_grids.len()
            )));
        }

        let template = extract::diff(reference, template)
            .map_err(|m| m.in_file(config.template.filename.clone()))?;

        let mut layers = Vec::with_capacity(config.layers.len());
        for (descriptor, grid) in config.layers.iter().zip(layer_grids) {
            let residual = extract::diff(reference, &grid)
                .map_err(|m| m.in_file(descriptor.filename.clone()))?;
            layers.push(Layer::new(
                descriptor.name.clone(),
                descriptor.filename.clone(),
                residual,
                config.number_of_keys,
            ));
        }

        let footprints = extract::scan(&template)?;
        extract::check_bounds(&footprints, config.number_of_keys)?;
        debug!(count = footprints.len(), "scanned template footprints");

        extract::harvest(&mut layers, &footprints);

        let report = resolve_all(&mut layers, &config.symbol_to_keycode);

        Ok(Keymap {
            config,
            footprints,
            layers,
            report,
        })
    }

    /// Loads `keymap.json` and every drawing from the input folder, then builds.
    ///
    /// # Errors
    ///
    /// Returns I/O and decode errors in addition to those of [`Self::build`].
    pub fn load(options: &GenerateOptions) -> Result<Keymap> {
        let config_path = options.config_path();
        let config = parser::parse_keymap_json(&config_path)?;
        info!(
            path = %config_path.display(),
            layers = config.layers.len(),
            keys = config.number_of_keys,
            "loaded keymap configuration"
        );

        let reference = parser::load_grid(&options.input_path(&config.reference.filename))?;
        let template = parser::load_grid(&options.input_path(&config.template.filename))?;

        let mut layer_grids = Vec::with_capacity(config.layers.len());
        for descriptor in &config.layers {
            let grid = parser::load_grid(&options.input_path(&descriptor.filename))?;
            debug!(layer = %descriptor.name, rows = grid.height(), "loaded layer drawing");
            layer_grids.push(grid);
        }

        Self::build(config, &reference, &template, layer_grids)
    }

    /// Runs the whole pipeline and writes both artifacts.
    ///
    /// Nothing is written if any stage fails, including the unresolved-symbol
    /// check under [`UnresolvedPolicy::Fail`]. With `dry_run` the artifacts are
    /// rendered but not written.
    pub fn generate(options: &GenerateOptions, dry_run: bool) -> Result<GenerateOutcome> {
        let keymap = Self::load(options)?;
        keymap.enforce(options.policy)?;

        if !keymap.report.is_clean() {
            warn!(
                count = keymap.report.len(),
                "unresolved symbols rendered as placeholders"
            );
        }

        let artifacts = keymap.render();
        let files = [
            (options.keymap_c_path(), artifacts.keymap_c),
            (options.layers_h_path(), artifacts.layers_h),
        ];

        let written = if dry_run {
            Vec::new()
        } else {
            std::fs::create_dir_all(&options.output_dir)
                .map_err(|e| KeymapError::io(&options.output_dir, e))?;
            write_all_atomic(&files)?;
            files.into_iter().map(|(path, _)| path).collect()
        };

        for path in &written {
            info!(path = %path.display(), "wrote artifact");
        }

        Ok(GenerateOutcome { keymap, written })
    }
}

/// Writes every file through a temporary sibling, renaming only after all
/// temporaries are complete.
///
/// On failure the remaining temporaries are removed. No target is touched
/// unless a rename itself fails, in which case earlier renames stand.
fn write_all_atomic(files: &[(PathBuf, String)]) -> Result<()> {
    let mut staged = Vec::with_capacity(files.len());

    for (path, content) in files {
        let temp_path = temp_path_for(path);
        if let Err(e) = std::fs::write(&temp_path, content) {
            let _ = std::fs::remove_file(&temp_path);
            discard(&staged);
            return Err(KeymapError::io(&temp_path, e));
        }
        staged.push((temp_path, path.clone()));
    }

    for (done, (temp_path, path)) in staged.iter().enumerate() {
        if let Err(e) = std::fs::rename(temp_path, path) {
            discard(&staged[done..]);
            return Err(KeymapError::io(path, e));
        }
    }

    Ok(())
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temp_path, _) in staged {
        let _ = std::fs::remove_file(temp_path);
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
