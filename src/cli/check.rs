//! Check command: runs the pipeline and reports unresolved symbols.

use crate::cli::common::{CliError, CliResult, InputArgs};
use crate::config::GenerateOptions;
use crate::firmware::UnresolvedSymbol;
use crate::services::KeymapService;
use clap::Args;
use serde::Serialize;

/// Check layer drawings against the symbol table without writing output
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Input folder
    #[command(flatten)]
    pub input: InputArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for `check --json`.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// True when every symbol resolved
    pub valid: bool,
    /// Number of layers checked
    pub layers: usize,
    /// Distinct key indices found in the template
    pub keys: usize,
    /// Every unresolved symbol
    pub unresolved: Vec<UnresolvedSymbol>,
    /// Distinct symbols missing from the table
    pub missing_symbols: Vec<String>,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        let options = GenerateOptions::new(&self.input.input, ".");
        let keymap = KeymapService::load(&options)?;

        let response = CheckResponse {
            valid: keymap.report.is_clean(),
            layers: keymap.layers.len(),
            keys: keymap.discovered_indices().len(),
            missing_symbols: keymap
                .report
                .missing_symbols()
                .into_iter()
                .map(str::to_string)
                .collect(),
            unresolved: keymap.report.unresolved.clone(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ All symbols resolved");
            } else {
                println!("✗ {} unresolved symbol(s)", keymap.report.len());
            }
            println!("  Layers: {}", response.layers);
            println!("  Keys:   {}", response.keys);

            if !response.valid {
                println!("\nIssues:");
                print!("{}", keymap.report.format_message());
                println!("\nMissing from symbol_to_keycode:");
                for symbol in &response.missing_symbols {
                    println!("  \"{symbol}\"");
                }
            }
        }

        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation("Unresolved symbols found"))
        }
    }
}
