//! HTTP bridge
//!
//! Exposes the host API over a local HTTP server so the host can call it as
//! remote procedures.

pub mod app;
pub mod handlers;

pub use app::{AppState, create_app};
