//! Runtime settings for the backend process
//!
//! This module handles loading and validating the settings that control the
//! bridge, the plugin location and logging.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;
