//! Version information

/// Crate version as recorded in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the backend version string
pub fn get_version() -> &'static str {
    VERSION
}
