use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_server_url() -> String {
    "http://localhost:5000".to_string()
}
fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            theme: default_theme(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lexigo")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server_url, "http://localhost:5000");
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let config: Config = toml::from_str(r#"server_url = "https://lexigo.example""#).unwrap();
        assert_eq!(config.server_url, "https://lexigo.example");
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn roundtrip() {
        let mut config = Config::default();
        config.server_url = "http://10.0.0.2:5000".to_string();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.server_url, deserialized.server_url);
        assert_eq!(config.theme, deserialized.theme);
    }
}
