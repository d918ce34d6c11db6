//! Server mode CLI logic
//!
//! Contains the core logic for running the HTTP bridge.

use crate::{api::Backend, config::Settings, server::app, utils::version};
use anyhow::Result;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Serve `backend` on the configured address until Ctrl-C
pub async fn run_server_mode(backend: Backend, settings: Settings) -> Result<()> {
    let addr = parse_bind_address(&settings.bridge.host, settings.bridge.port)?;

    let app = app::create_app(backend, settings);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Config bridge v{} listening on {}",
        version::get_version(),
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Config bridge stopped");
    Ok(())
}

/// Parse the host string into a bind address.
///
/// Accepts IP literals and `localhost`. Host names are not resolved.
pub fn parse_bind_address(host: &str, port: u16) -> Result<SocketAddr> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        let addr = SocketAddr::new(ip, port);
        tracing::debug!("Parsed address: {}", addr);
        return Ok(addr);
    }

    match host {
        "localhost" => Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port)),
        _ => anyhow::bail!(
            "Invalid host address: {}. Use an IP address or 'localhost'",
            host
        ),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
