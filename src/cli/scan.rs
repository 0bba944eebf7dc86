//! Scan command: shows the key regions and harvested symbols.

use crate::cli::common::{CliError, CliResult, InputArgs};
use crate::config::GenerateOptions;
use crate::models::{Footprint, Key};
use crate::services::{Keymap, KeymapService};
use clap::Args;
use serde::Serialize;

/// Print the key regions found in the template and each layer's symbols
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Input folder
    #[command(flatten)]
    pub input: InputArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ScanResponse<'a> {
    footprints: &'a [Footprint],
    layers: Vec<LayerSymbols<'a>>,
}

#[derive(Debug, Serialize)]
struct LayerSymbols<'a> {
    name: &'a str,
    keys: Vec<&'a Key>,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> CliResult<()> {
        let options = GenerateOptions::new(&self.input.input, ".");
        let keymap = KeymapService::load(&options)?;

        if self.json {
            let response = ScanResponse {
                footprints: &keymap.footprints,
                layers: keymap
                    .layers
                    .iter()
                    .map(|layer| LayerSymbols {
                        name: &layer.name,
                        keys: layer.discovered().collect(),
                    })
                    .collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print_text(&keymap);
        }

        Ok(())
    }
}

fn print_text(keymap: &Keymap) {
    println!("Footprints ({}):", keymap.footprints.len());
    for fp in &keymap.footprints {
        println!(
            "  key {:>3}  line {:>3}  chars {}..{}",
            fp.index, fp.row, fp.col_start, fp.col_end
        );
    }

    for layer in &keymap.layers {
        println!("\nLayer {}:", layer.name);
        for key in layer.discovered() {
            println!("  {:>3}  {:<16} {}", key.index, key.symbol, key.output_code());
        }
    }
}
