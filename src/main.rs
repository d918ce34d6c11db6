//! Launch options config backend
//!
//! Owns the plugin's `config.json` and answers the host's config calls,
//! either as a long-running HTTP bridge or one call per invocation.
//!
//! # Usage
//!
//! ```bash
//! launch-config --plugin-root /path/to/plugin serve --port 4417
//! launch-config --plugin-root /path/to/plugin hook
//! launch-config --plugin-root /path/to/plugin set '{"globalLaunchOptions":"-novid"}'
//! ```

use clap::Parser;
use launch_options_config::{
    cli::{self, Cli, Command, oneshot},
    utils::{logging, version},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Settings are loaded before their log level is known, so their own
    // diagnostics go through a scoped subscriber with the default level.
    let bootstrap = logging::subscriber(if cli.verbose { "debug" } else { "info" });
    let settings = tracing::subscriber::with_default(bootstrap, || cli::resolve_settings(&cli))?;
    logging::init_logging(settings.log_filter());

    tracing::debug!("Starting launch-config v{}", version::get_version());

    let mut backend = cli::open_backend(&settings);
    tracing::info!("Plugin ready!");

    if let Command::Serve { .. } = cli.command {
        return cli::server::run_server_mode(backend, settings).await;
    }

    if let Some(output) = oneshot::execute(&mut backend, &cli.command) {
        println!("{}", output.stdout);
        if !output.success {
            std::process::exit(1);
        }
    }

    Ok(())
}
