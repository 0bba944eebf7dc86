//! Generate command for keymap.c and layers.h.

use crate::cli::common::{CliResult, InputArgs};
use crate::config::{GenerateOptions, UnresolvedPolicy};
use crate::services::KeymapService;
use clap::Args;
use std::path::PathBuf;

/// Generate keymap.c and layers.h from the layer drawings
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Input folder
    #[command(flatten)]
    pub input: InputArgs,

    /// Folder that receives keymap.c and layers.h
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Fail instead of emitting a placeholder for unresolved symbols
    #[arg(long)]
    pub strict: bool,

    /// Run the pipeline without writing any files
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Builds the run options from the arguments.
    pub fn options(&self) -> GenerateOptions {
        let policy = if self.strict {
            UnresolvedPolicy::Fail
        } else {
            UnresolvedPolicy::Placeholder
        };
        GenerateOptions::new(&self.input.input, &self.output).with_policy(policy)
    }

    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let options = self.options();
        let outcome = KeymapService::generate(&options, self.dry_run)?;
        let keymap = &outcome.keymap;

        if self.dry_run {
            println!("✓ Dry run: generated {} layer(s), nothing written", keymap.layers.len());
            println!("  Would write: {}", options.keymap_c_path().display());
            println!("  Would write: {}", options.layers_h_path().display());
        } else {
            println!("✓ Generated keymap.c and layers.h");
            println!("  Output: {}", options.output_dir.display());
        }

        if !keymap.report.is_clean() {
            println!();
            println!(
                "⚠ {} unresolved symbol(s) emitted as placeholders:",
                keymap.report.len()
            );
            print!("{}", keymap.report.format_message());
        }

        Ok(())
    }
}
