//! Runtime settings structure
//!
//! Defines how the backend process itself is configured: where the bridge
//! listens, where the plugin is installed and how verbose logging is. These
//! are separate from the user-editable `config.json` document served to the
//! host.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file name of the user-editable config document
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Environment variable names recognised by [`Settings::merge_with_env_from`]
pub mod env {
    pub const HOST: &str = "LAUNCH_CONFIG_HOST";
    pub const PORT: &str = "LAUNCH_CONFIG_PORT";
    pub const PLUGIN_ROOT: &str = "LAUNCH_CONFIG_PLUGIN_ROOT";
    pub const CONFIG_FILE: &str = "LAUNCH_CONFIG_FILE";
    pub const LOG_LEVEL: &str = "LAUNCH_CONFIG_LOG_LEVEL";
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main runtime settings for the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bridge configuration
    pub bridge: BridgeSettings,
    /// Plugin installation configuration
    pub plugin: PluginSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// HTTP bridge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    /// Bridge host address
    pub host: String,
    /// Bridge port
    pub port: u16,
}

/// Where the plugin lives and what its config document is called
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Plugin root directory. When unset, it is derived from the executable location.
    pub root_dir: Option<PathBuf>,
    /// Config document file name inside the plugin root
    pub config_file: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4417,
        }
    }
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            root_dir: None,
            config_file: DEFAULT_CONFIG_FILE.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file. Missing sections and keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: Settings = toml::from_str(&content)?;
        settings.logging.level = settings.logging.level.to_lowercase();
        Ok(settings)
    }

    /// Apply environment variable overrides using the given lookup
    pub fn merge_with_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(env::HOST) {
            self.bridge.host = host;
        }

        if let Some(port) = lookup(env::PORT) {
            self.bridge.port = port
                .parse()
                .map_err(|e| Error::config(format!("Invalid port: {}", e)))?;
        }

        if let Some(root) = lookup(env::PLUGIN_ROOT) {
            self.plugin.root_dir = Some(PathBuf::from(root));
        }

        if let Some(file) = lookup(env::CONFIG_FILE) {
            self.plugin.config_file = file;
        }

        if let Some(level) = lookup(env::LOG_LEVEL) {
            self.logging.level = level.to_lowercase();
        }

        Ok(self)
    }

    /// Check the settings every command relies on
    pub fn validate(&self) -> Result<()> {
        let file = Path::new(&self.plugin.config_file);
        if self.plugin.config_file.is_empty() || file.file_name() != Some(file.as_os_str()) {
            return Err(Error::config(format!(
                "Config file must be a bare file name, got {:?}",
                self.plugin.config_file
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::config(format!(
                "Unknown log level {:?}, expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Check the settings only the HTTP bridge relies on
    pub fn validate_bridge(&self) -> Result<()> {
        if self.bridge.port == 0 {
            return Err(Error::config("Bridge port must be non-zero"));
        }
        if self.bridge.host.trim().is_empty() {
            return Err(Error::config("Bridge host must not be empty"));
        }
        Ok(())
    }

    /// The filter directive handed to the tracing subscriber
    pub fn log_filter(&self) -> &str {
        if self.logging.verbose {
            "debug"
        } else {
            &self.logging.level
        }
    }
}
