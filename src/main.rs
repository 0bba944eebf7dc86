//! ASCII Keymap Generator - QMK keymap sources from ASCII-art layer drawings
//!
//! Reads `keymap.json` and the layer drawings from an input folder and
//! writes `keymap.c` and `layers.h` to an output folder.

use asciimap::cli::{CheckArgs, CliResult, ExitCode, GenerateArgs, ScanArgs};
use asciimap::constants::APP_NAME;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ASCII Keymap Generator - QMK keymap sources from ASCII-art layer drawings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Generate with these arguments when no subcommand is given
    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate keymap.c and layers.h
    Generate(GenerateArgs),
    /// Report symbols missing from the symbol table
    Check(CheckArgs),
    /// Show key regions and harvested symbols
    Scan(ScanArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Some(Command::Generate(args)) => args.execute(),
        Some(Command::Check(args)) => args.execute(),
        Some(Command::Scan(args)) => args.execute(),
        None => cli.generate.execute(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            error!(code = e.code.code(), "{APP_NAME} failed");
            eprintln!("Error: {}", e.message);
            e.code
        }
    };

    std::process::exit(code.code());
}
