//! Command line interface
//!
//! `serve` runs the HTTP bridge; the other commands perform a single host
//! call against the config file and print its result, for hosts that invoke
//! the backend as a script.

pub mod oneshot;
pub mod server;

use crate::{
    api::Backend,
    config::{ConfigLoader, Settings},
    store::{ConfigStore, resolve_path},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

/// Launch options config backend
#[derive(Parser, Debug)]
#[command(name = "launch-config", author, version, about, long_about = None)]
pub struct Cli {
    /// Plugin root directory holding the config file
    #[arg(long, value_name = "DIR", global = true)]
    pub plugin_root: Option<PathBuf>,

    /// Runtime settings file (TOML)
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the config API over HTTP
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the full config document
    Get,
    /// Reload the config file and print the hook config
    Hook,
    /// Merge a JSON object into the config and save it
    Set {
        /// JSON object with the keys to overwrite
        #[arg(value_name = "JSON")]
        config_json: String,
    },
    /// Reload the config file
    Reload,
}

/// Load settings and apply command line overrides on top.
///
/// `serve` fails on unusable settings. The script commands never touch the
/// bridge, so they fall back to defaults instead and keep answering the host.
pub fn resolve_settings(cli: &Cli) -> crate::Result<Settings> {
    resolve_settings_with(cli, ConfigLoader::new().load(cli.settings.as_deref()))
}

fn resolve_settings_with(cli: &Cli, loaded: crate::Result<Settings>) -> crate::Result<Settings> {
    let serving = matches!(cli.command, Command::Serve { .. });
    let mut settings = match loaded {
        Ok(settings) => settings,
        Err(e) if !serving => {
            warn!("Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(root) = &cli.plugin_root {
        settings.plugin.root_dir = Some(root.clone());
    }
    if cli.verbose {
        settings.logging.verbose = true;
    }
    if let Command::Serve { host, port } = &cli.command {
        if let Some(host) = host {
            settings.bridge.host = host.clone();
        }
        if let Some(port) = port {
            settings.bridge.port = *port;
        }
    }

    if serving {
        settings.validate_bridge()?;
    }
    Ok(settings)
}

/// Resolve the config file and open the store behind a [`Backend`]
pub fn open_backend(settings: &Settings) -> Backend {
    let path = resolve_path(
        settings.plugin.root_dir.as_deref(),
        &settings.plugin.config_file,
    );
    Backend::new(ConfigStore::open(path))
}
