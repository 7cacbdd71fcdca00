//! Configuration for pairvote.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{PairVoteError, PairVoteResult};

/// Main configuration for pairvote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Voting settings.
    #[serde(default)]
    pub voting: VotingConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Voting settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Entries listed inline, in pairing order.
    #[serde(default)]
    pub entries: Vec<String>,

    /// JSON file holding an array of entries. Takes precedence over `entries`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries_file: Option<PathBuf>,
}

impl VotingConfig {
    /// Returns the configured entries, reading `entries_file` when set.
    pub fn resolve_entries(&self) -> PairVoteResult<Vec<String>> {
        match &self.entries_file {
            Some(path) => load_entries(path),
            None => Ok(self.entries.clone()),
        }
    }
}

/// Reads a JSON array of entries from `path`.
pub fn load_entries<P: AsRef<Path>>(path: P) -> PairVoteResult<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<String> = serde_json::from_str(&content).map_err(|e| {
        PairVoteError::config(format!(
            "entries file {} is not a JSON array of strings: {}",
            path.display(),
            e
        ))
    })?;

    tracing::debug!(path = %path.display(), count = entries.len(), "Entries loaded");
    Ok(entries)
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> PairVoteResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> PairVoteResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            voting: VotingConfig::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    ///
    /// A missing file yields defaults silently. A file that cannot be read or
    /// parsed also yields defaults, and its error is returned alongside so the
    /// caller can report it once logging is up.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> (Self, Option<PairVoteError>) {
        let path = path.as_ref();
        if !path.exists() {
            return (Self::default_config(), None);
        }

        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default_config(), Some(e)),
        }
    }
}
