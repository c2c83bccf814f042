//! Configuration file support for FitPlan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitplan/config.toml`.

use crate::{FitnessLevel, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl DataConfig {
    /// Path of the user registry file inside the data directory
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.txt")
    }
}

/// Weekly exercise time parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_base_minutes")]
    pub base_minutes: u32,

    #[serde(default = "default_beginner_bonus")]
    pub beginner_bonus: u32,

    #[serde(default = "default_intermediate_bonus")]
    pub intermediate_bonus: u32,

    #[serde(default = "default_advanced_bonus")]
    pub advanced_bonus: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            base_minutes: default_base_minutes(),
            beginner_bonus: default_beginner_bonus(),
            intermediate_bonus: default_intermediate_bonus(),
            advanced_bonus: default_advanced_bonus(),
        }
    }
}

impl ScheduleConfig {
    /// Per-matched-plan bonus minutes for a fitness level
    pub fn level_bonus(&self, level: FitnessLevel) -> u32 {
        match level {
            FitnessLevel::Beginner => self.beginner_bonus,
            FitnessLevel::Intermediate => self.intermediate_bonus,
            FitnessLevel::Advanced => self.advanced_bonus,
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("fitplan")
}

fn default_base_minutes() -> u32 {
    120
}

fn default_beginner_bonus() -> u32 {
    30
}

fn default_intermediate_bonus() -> u32 {
    20
}

fn default_advanced_bonus() -> u32 {
    10
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("fitplan").join("config.toml")
    }

}
