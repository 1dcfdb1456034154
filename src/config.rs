//! ctb configuration.
//!
//! Loaded from `~/.ctb/config.toml` when present. Every field is optional;
//! a missing file means defaults.
//!
//! The data file is resolved through a chain:
//!
//! 1. `--data <path>`: explicit per-run override
//! 2. `CTB_DATA` env var
//! 3. `data-file` in the config file
//! 4. `data.json` in the working directory

use std::{env, fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Data file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Environment variable naming the data file.
pub const DATA_ENV: &str = "CTB_DATA";

/// Errors reading the config file. A missing file is not an error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// ctb configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Prompt list to read when `--data` and `CTB_DATA` are absent.
    pub data_file: Option<PathBuf>,

    /// Progress bar width in cells.
    pub bar_width: Option<usize>,

    /// Draw the bar with ANSI colors. Defaults to true.
    pub color: Option<bool>,
}

impl Config {
    /// Load config from `~/.ctb/config.toml`, or defaults if it doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or defaults if it doesn't exist.
    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    /// The config file path: `~/.ctb/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".ctb").join("config.toml"))
    }

    /// Resolve the data file from the chain described in the module docs.
    pub fn data_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        let from_env = env::var(DATA_ENV).ok();
        self.resolve_data_file(explicit, from_env)
    }

    fn resolve_data_file(&self, explicit: Option<PathBuf>, from_env: Option<String>) -> PathBuf {
        if let Some(path) = explicit {
            return path;
        }

        if let Some(path) = from_env.filter(|s| !s.is_empty()) {
            return PathBuf::from(path);
        }

        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}
