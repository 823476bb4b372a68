//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// Every failure exits with 1, matching what scripts built around the
/// tool already check for. The names keep the call sites readable.
pub mod exit_codes {
    /// Missing domain argument.
    pub const USAGE: i32 = 1;

    /// Malformed argument, e.g. a non-numeric password length.
    pub const INVALID_INPUT: i32 = 1;

    /// Empty master password at the prompt.
    pub const CANCELLED: i32 = 1;
}

/// Notes file name, relative to the home directory.
pub const NOTES_FILE_NAME: &str = ".hap.json";

/// Interactive prompt texts, in the order they are asked.
pub mod prompts {
    pub const SALT: &str = "Enter salt. Hit enter to leave it blank";
    pub const NOTE: &str = "Enter note to save. Hit enter to leave it blank";
    pub const SECRET: &str = "Enter master password. Hit enter to abort";
}
