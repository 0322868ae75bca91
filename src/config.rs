use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::completion::CompletionMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Font and tab settings, resolved once when the widget is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    #[serde(rename = "family")]
    pub font_family: String,
    #[serde(rename = "size_pt")]
    pub font_size_pt: u16,
    pub tab_stop_spaces: u16,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            font_family: "Monospace".to_string(),
            font_size_pt: 12,
            tab_stop_spaces: 4,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CodepadConfig {
    pub completion: CompletionMode,
    pub font: WidgetConfig,
}

impl CodepadConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load the first config file found, or defaults when there is none.
    pub fn discover() -> Result<Self, ConfigError> {
        match find_config_file() {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("codepad")
}

pub fn find_config_file() -> Option<PathBuf> {
    let mut paths = vec![get_config_dir().join("config.toml")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".codepad").join("config.toml"));
    }
    paths.into_iter().find(|p| p.exists())
}
