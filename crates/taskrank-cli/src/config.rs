//! TOML-based CLI configuration.
//!
//! Stores output and suggestion defaults at
//! `~/.config/taskrank/config.toml`. Command-line flags always override
//! the stored values. The core library is pure and does no I/O, so the
//! configuration lives here at the boundary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

/// Suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/taskrank/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
}

fn default_limit() -> usize {
    taskrank_core::DEFAULT_SUGGESTION_LIMIT
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            suggest: SuggestConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let dir = dirs::config_dir()
            .ok_or("cannot determine config directory")?
            .join("taskrank");
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let config: Config = toml::from_str(&content)?;
                Ok(config)
            }
            Err(_) => {
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
        }
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist it.
    ///
    /// The new value must parse as the same JSON type the key currently
    /// holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;

        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (parents, leaf),
            None => ("", key),
        };
        let mut current = &mut json;
        if !parents.is_empty() {
            for part in parents.split('.') {
                current = current
                    .get_mut(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
            }
        }

        let object = current
            .as_object_mut()
            .ok_or_else(|| format!("unknown config key: {key}"))?;
        let existing = object
            .get(leaf)
            .ok_or_else(|| format!("unknown config key: {key}"))?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
            serde_json::Value::Number(_) => {
                let n: u64 = value
                    .parse()
                    .map_err(|_| format!("cannot parse '{value}' as number"))?;
                serde_json::Value::Number(n.into())
            }
            _ => serde_json::Value::String(value.into()),
        };
        object.insert(leaf.to_string(), new_value);

        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }
}
