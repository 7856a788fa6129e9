//! Server configuration.

use std::path::PathBuf;

use anyhow::Result;
use config::{Config, File};
use serde::Deserialize;

static DEFAULT_DATA_FILE: &str = "~/.local/share/evcal/events.json";

const DEFAULT_PORT: u16 = 4820;

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Configuration at ~/.config/evcal/config.toml (every key optional).
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
    /// Path of the JSON document holding the event list
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config: ServerConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("evcal");

        Ok(config_dir.join("config.toml"))
    }

    /// The events file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path)
    }
}
