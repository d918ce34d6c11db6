//! Type definitions for the host-facing surface
//!
//! This module contains the data structures returned to the host.

pub mod response;

pub use response::{HookConfig, PingResponse};
