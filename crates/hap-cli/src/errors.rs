//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! so every early exit goes through one place.

use std::fmt;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, PartialEq, Eq)]
pub enum CliError {
    /// Required argument missing; carries the usage line
    Usage(String),

    /// Argument present but malformed
    InvalidInput(String),

    /// User submitted an empty master password
    Cancelled,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(usage) => write!(f, "{}", usage),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a Usage error from a rendered usage line.
    pub fn usage(usage: impl Into<String>) -> Self {
        CliError::Usage(usage.into())
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::Usage(_) => exit_codes::USAGE,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Cancelled => exit_codes::CANCELLED,
        }
    }

    /// Print the error to stderr (cancellation stays quiet) and exit.
    pub fn exit(&self) -> ! {
        match self {
            CliError::Usage(usage) => eprintln!("{}", usage.trim_end()),
            CliError::InvalidInput(_) => eprintln!("Error: {}", self),
            CliError::Cancelled => {}
        }
        std::process::exit(self.exit_code())
    }
}

/// Exit code for an argument parse failure. Help and version output are
/// successes; every real parse error is a usage error.
pub fn clap_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        super::constants::exit_codes::USAGE
    } else {
        0
    }
}
