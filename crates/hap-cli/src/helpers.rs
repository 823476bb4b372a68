//! Argument parsing and input clean-up helpers for the CLI.

use crate::errors::CliError;

/// Trim the domain argument; a missing or blank domain is `None`.
pub fn resolve_domain(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|domain| !domain.is_empty())
        .map(str::to_string)
}

/// Parse the optional password length argument.
///
/// Anything that is not a non-negative integer is rejected. Values above
/// the derivable maximum are accepted here and clamped at derivation time.
pub fn parse_length(value: Option<&str>, default: usize) -> Result<usize, CliError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| CliError::invalid_input("Password length should be a number")),
    }
}

/// Strip the line terminator from a prompted line, keeping all other whitespace.
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
