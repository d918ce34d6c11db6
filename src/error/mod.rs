//! Error handling for the launch options backend
//!
//! This module defines error types and handling patterns used throughout the application.

pub mod types;

pub use types::{Error, ErrorKind, Result};
