//! Settings loading utilities
//!
//! Resolves runtime settings from their sources with validation.

use crate::{Result, config::Settings};
use std::path::Path;
use tracing::{debug, info, warn};

/// Settings loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new settings loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Load settings with precedence order:
    /// 1. Command line arguments (applied by the caller afterwards)
    /// 2. Environment variables
    /// 3. Settings file
    /// 4. Default values (lowest priority)
    pub fn load(&self, settings_file: Option<&Path>) -> Result<Settings> {
        self.load_with_env(settings_file, |key| std::env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load`] with an explicit environment lookup
    pub fn load_with_env<F>(&self, settings_file: Option<&Path>, lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = self.defaults.clone();

        if let Some(path) = settings_file {
            if path.exists() {
                info!("Loading settings from file: {:?}", path);
                settings = Settings::from_file(path)?;
            } else {
                warn!("Settings file not found: {:?}, using defaults", path);
            }
        }

        debug!("Applying environment variable overrides");
        settings = settings.merge_with_env_from(lookup)?;

        settings.validate()?;

        debug!("Final settings: {:?}", settings);

        Ok(settings)
    }

    /// Get default settings
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::env;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_defaults() {
        let loader = ConfigLoader::new();
        let settings = loader.load_with_env(None, no_env).unwrap();

        assert_eq!(&settings, loader.defaults());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[bridge]
port = 8080

[plugin]
root_dir = "/srv/plugins/launch-options"
        "#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let settings = loader
            .load_with_env(Some(temp_file.path()), no_env)
            .unwrap();

        assert_eq!(settings.bridge.host, "127.0.0.1");
        assert_eq!(settings.bridge.port, 8080);
        assert_eq!(
            settings.plugin.root_dir,
            Some(PathBuf::from("/srv/plugins/launch-options"))
        );
        assert_eq!(settings.plugin.config_file, "config.json");
    }

    #[test]
    fn test_env_beats_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[bridge]\nport = 8080").unwrap();

        let loader = ConfigLoader::new();
        let settings = loader
            .load_with_env(Some(temp_file.path()), |key| {
                (key == env::PORT).then(|| "9100".to_string())
            })
            .unwrap();

        assert_eq!(settings.bridge.port, 9100);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let loader = ConfigLoader::new();
        let settings = loader
            .load_with_env(Some(Path::new("/definitely/not/here.toml")), no_env)
            .unwrap();

        assert_eq!(settings.bridge.port, 4417);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[bridge\nport = ").unwrap();

        let loader = ConfigLoader::new();
        let result = loader.load_with_env(Some(temp_file.path()), no_env);
        assert!(matches!(result, Err(crate::Error::Toml(_))));
    }

    #[test]
    fn test_validation_runs_after_merge() {
        let loader = ConfigLoader::new();
        let result = loader.load_with_env(None, |key| {
            (key == env::LOG_LEVEL).then(|| "chatty".to_string())
        });
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_bridge_port_left_to_serve() {
        let loader = ConfigLoader::new();
        let settings = loader
            .load_with_env(None, |key| (key == env::PORT).then(|| "0".to_string()))
            .unwrap();

        assert_eq!(settings.bridge.port, 0);
        assert!(settings.validate_bridge().is_err());
    }

    #[test]
    fn test_file_level_case_normalized() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[logging]\nlevel = \"INFO\"").unwrap();

        let loader = ConfigLoader::new();
        let settings = loader
            .load_with_env(Some(temp_file.path()), no_env)
            .unwrap();

        assert_eq!(settings.logging.level, "info");
    }
}
