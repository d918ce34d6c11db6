//! Launch Options Config Backend
//!
//! Plugin-side store for the user's global launch options. The settings live
//! in a `config.json` next to the plugin, are cached in memory, and are served
//! to the host application through four calls: `get_config`,
//! `get_hook_config`, `set_config` and `reload_config`.
//!
//! # Architecture
//!
//! - [`store`]: the cached document and its JSON file
//! - [`api`]: the host entry points, which never fail
//! - [`server`]: an HTTP bridge routing the calls onto one shared backend
//! - [`cli`]: `serve` plus one-shot script commands
//!
//! # Examples
//!
//! ```rust
//! use launch_options_config::{Backend, ConfigStore};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut backend = Backend::new(ConfigStore::open(dir.path().join("config.json")));
//!
//! assert!(backend.set_config(r#"{"globalLaunchOptions":"-novid"}"#).into_value());
//! let hook = backend.get_hook_config().into_value();
//! assert_eq!(hook, r#"{"globalLaunchOptions":"-novid","excludedGameIds":""}"#);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;

pub use api::{Backend, CommitPolicy, Outcome};
pub use config::Settings;
pub use error::{Error, ErrorKind, Result};
pub use store::{ConfigDocument, ConfigStore};
pub use types::{HookConfig, PingResponse};
