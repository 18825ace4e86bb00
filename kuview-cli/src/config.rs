///! CLI configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_context: Option<String>,
    #[serde(default)]
    pub default_selector: Option<String>,
    #[serde(default = "default_output")]
    pub default_output: String,
}

fn default_output() -> String {
    "table".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_context: None,
            default_selector: None,
            default_output: default_output(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&contents)?;

        Ok(config)
    }

    fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")?;
        Ok(PathBuf::from(home).join(".config/kuview/cli.toml"))
    }
}
