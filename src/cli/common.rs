//! Shared types for command handlers: errors, exit codes, and input arguments.

use crate::error::KeymapError;
use clap::Args;
use std::fmt;
use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Run completed
    Success = 0,
    /// Input was read but is invalid (mismatch, bad index, unresolved symbol)
    ValidationError = 1,
    /// A file could not be read, decoded, or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit status.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a command handler.
#[derive(Debug)]
pub struct CliError {
    /// Exit code to terminate with
    pub code: ExitCode,
    /// Message shown to the user
    pub message: String,
}

impl CliError {
    /// An I/O or decode failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// A validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<KeymapError> for CliError {
    fn from(err: KeymapError) -> Self {
        match err {
            KeymapError::Io { .. } | KeymapError::Decode { .. } => Self::io(err.to_string()),
            _ => Self::validation(err.to_string()),
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Input folder argument shared by every command.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Folder containing keymap.json and the layer drawings
    #[arg(short = 'p', long = "input", value_name = "DIR", default_value = ".")]
    pub input: PathBuf,
}
