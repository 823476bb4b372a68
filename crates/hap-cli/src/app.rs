//! One password request, from note display to emitting the password.

use std::io::Write;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use zeroize::Zeroizing;

use hap_core::{derive_password, NoteBackend, NoteStore};

use crate::clipboard::Clipboard;
use crate::constants::prompts;
use crate::helpers::trim_line_ending;
use crate::prompt::Prompter;

/// Validated command-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub domain: String,
    pub length: usize,
}

/// How a request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Password written to `out` (and maybe the clipboard).
    Emitted,
    /// Empty master password; nothing was emitted.
    Cancelled,
}

/// Show notes, collect salt, note and master password, then emit the password.
pub fn run<B, P, C, W>(
    request: &Request,
    store: &mut NoteStore<B>,
    prompter: &mut P,
    clipboard: &mut C,
    out: &mut W,
) -> anyhow::Result<Outcome>
where
    B: NoteBackend,
    P: Prompter,
    C: Clipboard,
    W: Write,
{
    for line in store.list_for_domain(&request.domain) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    let salt = prompter.read_line(prompts::SALT, true)?;
    let salt = trim_line_ending(&salt);

    let note = prompter.read_line(prompts::NOTE, true)?;
    let note = trim_line_ending(&note);
    if let Some(added) = store.add(&request.domain, note) {
        debug!(key = %added.key, persisted = added.persisted, "note added");
    }

    let raw = Zeroizing::new(prompter.read_line(prompts::SECRET, false)?);
    let secret = SecretString::from(trim_line_ending(&raw).to_string());
    if secret.expose_secret().is_empty() {
        return Ok(Outcome::Cancelled);
    }

    let password = Zeroizing::new(derive_password(
        &request.domain,
        salt,
        secret.expose_secret(),
        request.length,
    ));
    if clipboard.copy(&password) {
        writeln!(out, "{} copied to your clipboard", password.as_str())?;
    } else {
        writeln!(out, "{}", password.as_str())?;
    }
    Ok(Outcome::Emitted)
}
