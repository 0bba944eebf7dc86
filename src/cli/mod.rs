//! CLI command handlers.
//!
//! Each command is a clap `Args` struct with an `execute` method returning
//! a [`CliResult`]. `main` maps errors to process exit codes.

pub mod check;
pub mod common;
pub mod generate;
pub mod scan;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode, InputArgs};
pub use generate::GenerateArgs;
pub use scan::ScanArgs;
