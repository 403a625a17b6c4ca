use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::EngineError,
    profile::RiskProfile,
    storage::{ensure_dir, write_atomic},
};

const CONFIG_FILE: &str = "config.json";
const HISTORY_FILE: &str = "history.json";
const PROFILE_FILE: &str = "profile.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    #[serde(default)]
    pub default_risk_profile: RiskProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            default_risk_profile: RiskProfile::default(),
        }
    }
}

/// Resolves and persists configuration under the platform data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, EngineError> {
        Self::from_base(default_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, EngineError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, EngineError> {
        ensure_dir(&base)?;
        let path = base.join(CONFIG_FILE);
        Ok(Self { base, path })
    }

    pub fn load(&self) -> Result<Config, EngineError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), EngineError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the plan history for this installation lives.
    pub fn history_path(&self) -> PathBuf {
        self.base.join(HISTORY_FILE)
    }

    /// Where the saved financial profile lives.
    pub fn profile_path(&self) -> PathBuf {
        self.base.join(PROFILE_FILE)
    }
}

fn default_base_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("budget_engine"))
        .unwrap_or_else(|| PathBuf::from("."))
}
