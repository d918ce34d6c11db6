//! Config document persistence
//!
//! The store keeps a cached copy of `config.json` and mirrors it to disk:
//! - [`path`] resolves where the file lives
//! - [`document`] holds the cached key/value document
//! - [`config_store`] loads, saves and merges

pub mod config_store;
pub mod document;
pub mod path;

pub use config_store::{ConfigStore, LoadOutcome};
pub use document::{ConfigDocument, EXCLUDED_GAME_IDS, GLOBAL_LAUNCH_OPTIONS};
pub use path::resolve_path;
