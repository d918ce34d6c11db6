//! Config file location
//!
//! The config document lives in the plugin root directory. The root is either
//! injected at startup or derived from where the executable is installed.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Fallback used when the plugin root cannot be determined
pub const FALLBACK_CONFIG_FILE: &str = "config.json";

/// How many levels above the executable file the plugin root sits
///
/// `<root>/backend/bin/launch-config` resolves to `<root>`.
pub const INSTALL_DEPTH: usize = 3;

/// Resolve the config file path once at startup.
///
/// `base` is the injected plugin root. Without one the root is derived from
/// the executable. On any failure this falls back to [`FALLBACK_CONFIG_FILE`]
/// relative to the working directory; it never fails.
pub fn resolve_path(base: Option<&Path>, file_name: &str) -> PathBuf {
    let root = match base {
        Some(dir) => absolutize(dir),
        None => locate_plugin_root(),
    };

    match root {
        Ok(root) => {
            let path = root.join(file_name);
            info!("Config file path: {}", path.display());
            path
        }
        Err(e) => {
            error!("Failed to determine config path: {}", e);
            PathBuf::from(FALLBACK_CONFIG_FILE)
        }
    }
}

/// Plugin root derived from the running executable
pub fn locate_plugin_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::path_resolution(format!("cannot locate executable: {}", e)))?;
    root_from_executable(&exe)
}

/// The directory [`INSTALL_DEPTH`] levels above `exe`
pub fn root_from_executable(exe: &Path) -> Result<PathBuf> {
    exe.ancestors()
        .nth(INSTALL_DEPTH)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            Error::path_resolution(format!(
                "{} is not nested {} levels deep",
                exe.display(),
                INSTALL_DEPTH
            ))
        })
}

fn absolutize(dir: &Path) -> Result<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(Error::path_resolution("plugin root is empty"));
    }
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| Error::path_resolution(format!("cannot read working directory: {}", e)))?;
    Ok(cwd.join(dir))
}
