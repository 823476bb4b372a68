use std::path::{Path, PathBuf};

use serde::Deserialize;

use hap_core::DEFAULT_LENGTH;

use crate::cli::Cli;
use crate::constants::NOTES_FILE_NAME;

/// Optional `config.toml`. Every section and key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HapConfig {
    pub notes: NotesSection,
    pub password: PasswordSection,
    pub clipboard: ClipboardSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NotesSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PasswordSection {
    pub default_length: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClipboardSection {
    pub enabled: bool,
}

impl Default for ClipboardSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Effective settings after applying config file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` when no notes location can be resolved (no `HOME`, no flag).
    pub notes_path: Option<PathBuf>,
    pub default_length: usize,
    pub clipboard: bool,
}

impl Settings {
    /// Flags win over the config file, which wins over built-in defaults.
    pub fn resolve(cli: &Cli, config: &HapConfig, home: Option<&Path>) -> Self {
        let notes_path = cli
            .notes
            .clone()
            .or_else(|| {
                config
                    .notes
                    .path
                    .as_deref()
                    .and_then(|path| expand_home(path, home))
            })
            .or_else(|| home.map(|home| home.join(NOTES_FILE_NAME)));

        Self {
            notes_path,
            default_length: config.password.default_length.unwrap_or(DEFAULT_LENGTH),
            clipboard: config.clipboard.enabled && !cli.no_clipboard,
        }
    }
}

/// Load the config file.
///
/// An explicitly named file must exist and parse. The default location is
/// optional: if it is absent (or `HOME` is unset) built-in defaults apply.
pub fn load_config(explicit: Option<&Path>, home: Option<&Path>) -> anyhow::Result<HapConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match home.map(default_config_path) {
        Some(path) if path.exists() => read_config(&path),
        _ => Ok(HapConfig::default()),
    }
}

pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("hap").join("config.toml")
}

pub fn read_config(path: &Path) -> anyhow::Result<HapConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// The user's home directory from `HOME`, if set and non-empty.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn expand_home(path: &str, home: Option<&Path>) -> Option<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => home.map(|home| home.join(rest)),
        None => Some(PathBuf::from(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["hap"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(
            &cli(&["example.com"]),
            &HapConfig::default(),
            Some(Path::new("/home/u")),
        );
        assert_eq!(
            settings,
            Settings {
                notes_path: Some(PathBuf::from("/home/u/.hap.json")),
                default_length: 14,
                clipboard: true,
            }
        );
    }

    #[test]
    fn test_no_home_and_no_flag_has_no_notes_path() {
        let settings = Settings::resolve(&cli(&["example.com"]), &HapConfig::default(), None);
        assert_eq!(settings.notes_path, None);
    }

    #[test]
    fn test_config_file_values() {
        let config: HapConfig = toml::from_str(
            "[notes]\npath = \"~/notes/hap.json\"\n\n[password]\ndefault_length = 20\n\n[clipboard]\nenabled = false\n",
        )
        .unwrap();
        let settings =
            Settings::resolve(&cli(&["example.com"]), &config, Some(Path::new("/home/u")));
        assert_eq!(
            settings.notes_path,
            Some(PathBuf::from("/home/u/notes/hap.json"))
        );
        assert_eq!(settings.default_length, 20);
        assert!(!settings.clipboard);
    }

    #[test]
    fn test_flags_override_config() {
        let config: HapConfig = toml::from_str("[notes]\npath = \"/srv/notes.json\"\n").unwrap();
        let settings = Settings::resolve(
            &cli(&["example.com", "--notes", "/tmp/mine.json", "--no-clipboard"]),
            &config,
            Some(Path::new("/home/u")),
        );
        assert_eq!(settings.notes_path, Some(PathBuf::from("/tmp/mine.json")));
        assert!(!settings.clipboard);
    }

    #[test]
    fn test_partial_config_parses() {
        let config: HapConfig = toml::from_str("[password]\ndefault_length = 10\n").unwrap();
        assert_eq!(config.password.default_length, Some(10));
        assert!(config.clipboard.enabled);
        assert!(config.notes.path.is_none());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml")), None).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_missing_default_config_is_default() {
        let config = load_config(None, Some(Path::new("/definitely/not/a/home"))).unwrap();
        assert!(config.clipboard.enabled);
    }
}
