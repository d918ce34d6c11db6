//! HTTP request handlers
//!
//! Each config route maps onto one [`Backend`](crate::api::Backend) call and
//! always answers `200 OK` with the host-visible value. A degraded call is
//! flagged with the [`DEGRADED_HEADER`] header instead of an error status.
//!
//! Backend calls do blocking file I/O while holding the backend lock. The
//! config file is a few hundred bytes and every call already waits on the
//! lock, so they run inline rather than on the blocking pool.

use crate::{
    ErrorKind,
    api::Outcome,
    server::app::AppState,
    types::PingResponse,
    utils::version,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderValue, header},
    response::{IntoResponse, Json, Response},
};

/// Response header naming the [`ErrorKind`] of a degraded call
pub const DEGRADED_HEADER: &str = "x-config-degraded";

/// Full config document
///
/// GET /get_config
pub async fn get_config(State(state): State<AppState>) -> Response {
    let outcome = state.backend.lock().await.get_config();
    respond(outcome)
}

/// Hook config, reloaded from disk
///
/// GET /get_hook_config
pub async fn get_hook_config(State(state): State<AppState>) -> Response {
    let outcome = state.backend.lock().await.get_hook_config();
    respond(outcome)
}

/// Merge the JSON object in the request body into the config
///
/// POST /set_config
pub async fn set_config(State(state): State<AppState>, body: Bytes) -> Response {
    let outcome = match std::str::from_utf8(&body) {
        Ok(config_json) => state.backend.lock().await.set_config(config_json),
        Err(e) => {
            tracing::error!("Failed to update config: request body is not UTF-8: {}", e);
            Outcome::degraded(false, ErrorKind::InputParse)
        }
    };
    respond(map_value(outcome, |ok| ok.to_string()))
}

/// Re-read the config file
///
/// POST /reload_config
pub async fn reload_config(State(state): State<AppState>) -> Response {
    let outcome = state.backend.lock().await.reload_config();
    respond(map_value(outcome, |ok| ok.to_string()))
}

/// Ping endpoint for health checks
///
/// GET /ping
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    let response = PingResponse::new(uptime, version::get_version());

    tracing::debug!(
        "Ping response: uptime={}s, version={}",
        uptime,
        version::get_version()
    );
    Json(response)
}

fn map_value<T, U>(outcome: Outcome<T>, f: impl FnOnce(T) -> U) -> Outcome<U> {
    let kind = outcome.degraded_kind();
    Outcome::ok(f(outcome.into_value())).or_degraded(kind)
}

fn respond(outcome: Outcome<String>) -> Response {
    let kind = outcome.degraded_kind();
    let mut response = (
        [(header::CONTENT_TYPE, "application/json")],
        outcome.into_value(),
    )
        .into_response();

    if let Some(kind) = kind {
        tracing::debug!("Call degraded: {}", kind);
        response
            .headers_mut()
            .insert(DEGRADED_HEADER, HeaderValue::from_static(kind.as_str()));
    }
    response
}
