//! Axum application setup
//!
//! Creates and configures the bridge application with routes and middleware.

use crate::{api::Backend, config::Settings};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The config backend. Calls are serialized through the lock.
    pub backend: Arc<Mutex<Backend>>,
    /// Application settings
    pub settings: Arc<Settings>,
    /// Bridge start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(backend: Backend, settings: Settings) -> Self {
        Self {
            backend: Arc::new(Mutex::new(backend)),
            settings: Arc::new(settings),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Create the main Axum application with routes and middleware
pub fn create_app(backend: Backend, settings: Settings) -> Router {
    router(AppState::new(backend, settings))
}

/// Build the router around an existing state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get_config", get(super::handlers::get_config))
        .route("/get_hook_config", get(super::handlers::get_hook_config))
        .route("/set_config", post(super::handlers::set_config))
        .route("/reload_config", post(super::handlers::reload_config))
        .route("/ping", get(super::handlers::ping))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
