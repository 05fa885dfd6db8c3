//! Configuration management for CLI tools.
//!
//! Configuration is stored in ~/.yomiage/{app_name}/config.yaml. It is only
//! ever read: a missing default file is treated as an empty configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default base configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".yomiage";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine config path")]
    NoConfigPath,
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Name of the currently active context.
    #[serde(default)]
    pub current_context: String,

    /// Map of context name to context configuration.
    #[serde(default)]
    pub contexts: HashMap<String, Context>,
}

/// A single engine context configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Context {
    /// Context name.
    #[serde(default)]
    pub name: String,

    /// Engine base URL (optional, uses default if empty).
    #[serde(default)]
    pub base_url: String,

    /// Default speaker name (optional).
    #[serde(default)]
    pub default_voice: String,
}

impl Config {
    /// Gets the default config directory.
    pub fn default_config_dir(app_name: &str) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(app_name))
    }

    /// Gets the default config file path.
    pub fn default_config_path(app_name: &str) -> Option<PathBuf> {
        Self::default_config_dir(app_name).map(|dir| dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Gets a specific context.
    pub fn get_context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Gets the current context.
    pub fn get_current_context(&self) -> Option<&Context> {
        if self.current_context.is_empty() {
            return None;
        }
        self.contexts.get(&self.current_context)
    }

    /// Resolves the context by name, or current context if name is empty.
    pub fn resolve_context(&self, name: Option<&str>) -> Option<&Context> {
        match name {
            Some(n) if !n.is_empty() => self.get_context(n),
            _ => self.get_current_context(),
        }
    }
}

/// Loads configuration for the specified app.
///
/// With no `custom_path`, a missing default file yields an empty config. An
/// explicitly given path must exist.
pub fn load_config(app_name: &str, custom_path: Option<&str>) -> Result<Config, ConfigError> {
    let (config_path, must_exist) = match custom_path {
        Some(p) => (PathBuf::from(p), true),
        None => (
            Config::default_config_path(app_name).ok_or(ConfigError::NoConfigPath)?,
            false,
        ),
    };

    if !must_exist && !config_path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;
    parse_config(&content, &config_path)
}

fn parse_config(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let mut cfg: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };

    // Context names come from the map keys.
    for (name, ctx) in cfg.contexts.iter_mut() {
        if ctx.name.is_empty() {
            ctx.name = name.clone();
        }
    }

    Ok(cfg)
}
