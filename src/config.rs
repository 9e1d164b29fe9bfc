// Demo configuration: optional TOML file named by PATTERNS_CONFIG.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PatternError;

pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub color: bool,
    pub log_filter: String,
    pub flyweight: FlyweightSettings,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "warn".to_string(),
            flyweight: FlyweightSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FlyweightSettings {
    pub draws: usize,
    pub palette: Vec<String>,
    pub max_coordinate: u32,
    pub seed: Option<u64>,
}

impl Default for FlyweightSettings {
    fn default() -> Self {
        Self {
            draws: 10,
            palette: ["Red", "Green", "Blue", "Yellow", "Black", "White"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            max_coordinate: 100,
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, PatternError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Path named by `PATTERNS_CONFIG`, if set.
    pub fn env_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV).map(PathBuf::from)
    }

    /// Reads the file named by `PATTERNS_CONFIG`, or falls back to defaults.
    pub fn from_env() -> Result<Self, PatternError> {
        match Self::env_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        self.flyweight.validate()
    }
}

impl FlyweightSettings {
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.draws == 0 {
            return Err(PatternError::config("flyweight.draws must be at least 1"));
        }
        if self.palette.is_empty() {
            return Err(PatternError::config("flyweight.palette must not be empty"));
        }
        if let Some(blank) = self.palette.iter().find(|c| c.trim().is_empty()) {
            return Err(PatternError::config(format!(
                "flyweight.palette contains a blank colour: {blank:?}"
            )));
        }
        if self.max_coordinate == 0 {
            return Err(PatternError::config(
                "flyweight.max_coordinate must be at least 1",
            ));
        }
        Ok(())
    }
}
