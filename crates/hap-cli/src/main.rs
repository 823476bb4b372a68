//! Hap CLI - deterministic per-domain passwords from a single master password
//!
//! `hap <domain> [password-length]` shows the notes kept for the domain,
//! asks for a salt, an optional new note and the master password, then
//! prints the derived password. The master password is never stored.

mod app;
mod cli;
mod clipboard;
mod config;
mod constants;
mod errors;
mod helpers;
mod prompt;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use hap_core::{JsonFileBackend, MemoryBackend, NoteBackend, NoteStore};

use crate::app::{Outcome, Request};
use crate::cli::Cli;
use crate::clipboard::{Clipboard, NoClipboard, SystemClipboard};
use crate::config::{home_dir, load_config, Settings};
use crate::errors::{clap_exit_code, CliError};
use crate::helpers::{parse_length, resolve_domain};
use crate::prompt::TerminalPrompter;

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(clap_exit_code(&err))
        }
    };
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "hap", &mut io::stdout());
        return Ok(());
    }

    let Some(domain) = resolve_domain(cli.domain.as_deref()) else {
        CliError::usage(Cli::command().render_usage().to_string()).exit()
    };

    let home = home_dir();
    let config = load_config(cli.config.as_deref(), home.as_deref())?;
    let settings = Settings::resolve(&cli, &config, home.as_deref());
    let length = match parse_length(cli.length.as_deref(), settings.default_length) {
        Ok(length) => length,
        Err(err) => err.exit(),
    };
    let request = Request { domain, length };

    let outcome = match settings.notes_path.as_deref() {
        Some(path) => execute(&request, JsonFileBackend::new(path), &settings),
        None => {
            warn!("HOME is not set; notes will not be kept");
            execute(&request, MemoryBackend::new(), &settings)
        }
    }?;

    match outcome {
        Outcome::Emitted => Ok(()),
        Outcome::Cancelled => CliError::Cancelled.exit(),
    }
}

fn execute<B: NoteBackend>(
    request: &Request,
    backend: B,
    settings: &Settings,
) -> anyhow::Result<Outcome> {
    let mut store = NoteStore::load(backend);
    let mut prompter = TerminalPrompter::new();
    let mut clipboard: Box<dyn Clipboard> = if settings.clipboard {
        Box::new(SystemClipboard)
    } else {
        Box::new(NoClipboard)
    };
    let mut stdout = io::stdout().lock();
    app::run(request, &mut store, &mut prompter, &mut clipboard, &mut stdout)
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
