//! Logging setup
//!
//! Logs go to stderr so the one-shot commands keep stdout for the host.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the subscriber used by the process. `RUST_LOG` wins over `default_filter`.
pub fn subscriber(default_filter: &str) -> impl tracing::Subscriber + Send + Sync + use<> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

/// Install the global subscriber
pub fn init_logging(default_filter: &str) {
    subscriber(default_filter).init();
}

