use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use hap_core::VERSION;

/// Hap - derive the same password for a domain every time, from one master password
#[derive(Parser)]
#[command(name = "hap")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Domain (site or service) the password is for
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Password length (default 14, at most 28)
    #[arg(value_name = "PASSWORD_LENGTH", allow_negative_numbers = true)]
    pub length: Option<String>,

    /// Path to the notes file (defaults to ~/.hap.json)
    #[arg(long, value_name = "PATH")]
    pub notes: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.config/hap/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the password without copying it to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Log storage and clipboard diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
