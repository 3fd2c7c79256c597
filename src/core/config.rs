use crate::error::{ProbeError, Result};
use crate::platform::RemoteSessionPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How an unset SESSIONNAME is read when deciding if the session is remote
    #[serde(default)]
    pub remote_session_policy: RemoteSessionPolicy,
}

impl Config {
    /// Load from the user config directory, defaults when nothing usable is there
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read(config_path)?;

        // If the file is empty or corrupted, return default config
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Config::default());
        }

        Ok(serde_json::from_slice(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config {:?}: {}", config_path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(self)?;
        fs::write(config_path, data)?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ProbeError::config("Could not determine config directory"))?;

        Ok(config_dir.join("hostprobe").join("config.json"))
    }

    pub fn set_remote_session_policy(&mut self, policy: RemoteSessionPolicy) {
        self.remote_session_policy = policy;
    }
}
