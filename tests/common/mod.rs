//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

/// Test helper functions
pub mod helpers {
    use launch_options_config::{Backend, ConfigStore};
    use serde_json::Value;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A throwaway plugin root with its config file path
    pub struct PluginRoot {
        pub dir: TempDir,
    }

    impl PluginRoot {
        pub fn new() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
            }
        }

        pub fn path(&self) -> &Path {
            self.dir.path()
        }

        pub fn config_path(&self) -> PathBuf {
            self.dir.path().join("config.json")
        }

        /// Write raw contents to the config file
        pub fn write_config(&self, contents: &str) {
            std::fs::write(self.config_path(), contents).unwrap();
        }

        /// Parse the config file as it currently is on disk
        pub fn read_config(&self) -> Value {
            let contents = std::fs::read_to_string(self.config_path()).unwrap();
            serde_json::from_str(&contents).unwrap()
        }

        /// Open a fresh backend over this root
        pub fn backend(&self) -> Backend {
            Backend::new(ConfigStore::open(self.config_path()))
        }
    }

    /// Parse a JSON string returned by the backend
    pub fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }
}
