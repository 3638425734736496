use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::{domain::track::default_seed_tracks, i18n::Language};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Reads config from a TOML file, or uses defaults if there is no such file
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            log::info!(
                "config {} not found, using defaults",
                path.to_string_lossy()
            );
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            language: Language::default(),
            tracker: TrackerConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_seed_tracks")]
    pub seed_tracks: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            seed_tracks: default_seed_tracks(),
        }
    }
}
