//! Utility functions and helpers
//!
//! This module contains utility functions used throughout the application.

pub mod logging;
pub mod version;

pub use version::{VERSION, get_version};
