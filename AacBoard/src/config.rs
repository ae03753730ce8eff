//! Persisted settings for the `aacboard` front-end

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maximum number of entries kept in [`BoardConfig::recent_boards`]
pub const MAX_RECENT_BOARDS: usize = 10;

fn default_board_path() -> PathBuf {
    PathBuf::from("AACMappingsDefault.txt")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings persisted between runs (saved as JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board file used when none is given on the command line
    #[serde(default = "default_board_path")]
    pub board_path: PathBuf,
    /// Default tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Recently opened boards, most recent first
    #[serde(default)]
    pub recent_boards: Vec<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_path: default_board_path(),
            log_level: default_log_level(),
            recent_boards: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("AacBoard").join("config.json"))
    }

    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| match Self::load_from(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring config {}: {e}", path.display());
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load config from an explicit path.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read, and
    /// [`Error::Config`] if its contents are not valid config JSON.
    ///
    /// [`Error::Io`]: crate::Error::Io
    /// [`Error::Config`]: crate::Error::Config
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the default location
    ///
    /// # Errors
    /// Returns an error if the config directory or file cannot be written.
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save config to an explicit path, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Record `path` as the most recently opened board
    pub fn add_recent_board(&mut self, path: &Path) {
        self.recent_boards.retain(|p| p != path);
        self.recent_boards.insert(0, path.to_path_buf());
        self.recent_boards.truncate(MAX_RECENT_BOARDS);
    }
}
