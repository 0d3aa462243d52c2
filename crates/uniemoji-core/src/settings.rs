//! Engine settings loaded from TOML.
//!
//! - `parse_settings_toml(toml_content)` parses and validates a settings file
//! - `Settings::default()` holds the same values as the embedded
//!   `default_settings.toml`; the `parse_default_toml` test keeps them equal
//! - Every key is optional; missing keys fall back to the embedded defaults
//!
//! Settings are handed to constructors explicitly. There is no process-wide
//! singleton, so two engines in one process can run with different options.

use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Digit keys 1..9,0 address at most ten rows of a page.
pub const MAX_PAGE_SIZE: usize = 10;

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_true")]
    pub commit_on_single_candidate: bool,
    #[serde(default = "default_true")]
    pub commit_on_zero_candidates: bool,
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_true() -> bool {
    true
}

fn default_prefixes() -> Vec<String> {
    vec![":".to_string()]
}

fn default_page_size() -> usize {
    MAX_PAGE_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            commit_on_single_candidate: true,
            commit_on_zero_candidates: true,
            prefixes: default_prefixes(),
            page_size: default_page_size(),
        }
    }
}

impl Settings {
    /// Read and validate a settings file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        parse_settings_toml(&content)
    }

    /// Settings with prefix mode disabled: every printable key composes.
    pub fn without_prefixes(mut self) -> Self {
        self.prefixes.clear();
        self
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.page_size == 0 || s.page_size > MAX_PAGE_SIZE {
        return Err(SettingsError::InvalidValue {
            field: "page_size".to_string(),
            reason: format!("must be between 1 and {MAX_PAGE_SIZE}"),
        });
    }
    // Empty prefixes are tolerated here; the prefix tracker drops them.
    Ok(())
}
