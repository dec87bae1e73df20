use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding reelname's own files, relative to the working directory.
pub const CONFIG_DIR: &str = ".reelname";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Directory containing the videos (None = current directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Append a run log to this file
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Config {
    /// Load config from .reelname/config.toml if it exists
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from_dir(&cwd)
    }

    /// Load config from `<dir>/.reelname/config.toml`, or defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Pick the target directory: explicit value first, then the config file,
    /// then the current directory.
    pub fn resolve_directory(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.defaults.directory.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn resolve_log_file(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.defaults.log_file.clone())
    }
}
