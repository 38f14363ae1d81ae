#[cfg(test)]
mod tests;

use crate::core::{
    gallery::{DEFAULT_CARD_COUNT, DEFAULT_NOTES_PER_CARD},
    loader::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, LoadRequest},
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Url returning the flat JSON array of notes
    pub endpoint: String,
    pub timeout_secs: u64,
    pub card_count: usize,
    pub notes_per_card: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            card_count: DEFAULT_CARD_COUNT,
            notes_per_card: DEFAULT_NOTES_PER_CARD,
        }
    }
}

impl Config {
    /// Load config from disk. A missing file is created with the defaults,
    /// an unreadable one is ignored.
    pub fn load() -> Self {
        let Some(path) = get_config_path() else {
            return Config::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                let config = Config::default();
                if let Err(err) = config.save_to(&path) {
                    log::warn!("Could not write default config: {err}");
                }
                config
            }
            Err(err) => {
                log::warn!("Ignoring config at {}: {err}", path.display());
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::debug!("Config saved to {}", path.display());
        Ok(())
    }

    pub fn load_request(&self) -> LoadRequest {
        LoadRequest {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

/// Returns the configuration file path.
fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("ai", "PianoRoll", "PianoRollGallery")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
}
