//! Script mode
//!
//! Runs one host call and renders what the host should read from stdout.

use crate::{api::Backend, cli::Command};
use tracing::warn;

/// Result of a single call in script mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutput {
    /// Text printed to stdout
    pub stdout: String,
    /// Whether the process should exit successfully
    pub success: bool,
}

/// Run `command` against `backend`. Returns `None` for `serve`.
pub fn execute(backend: &mut Backend, command: &Command) -> Option<CallOutput> {
    let (stdout, degraded, success) = match command {
        Command::Serve { .. } => return None,
        Command::Get => {
            let outcome = backend.get_config();
            (outcome.value().clone(), outcome.degraded_kind(), true)
        }
        Command::Hook => {
            let outcome = backend.get_hook_config();
            (outcome.value().clone(), outcome.degraded_kind(), true)
        }
        Command::Set { config_json } => {
            let outcome = backend.set_config(config_json);
            let ok = *outcome.value();
            (ok.to_string(), outcome.degraded_kind(), ok)
        }
        Command::Reload => {
            let outcome = backend.reload_config();
            let ok = *outcome.value();
            (ok.to_string(), outcome.degraded_kind(), ok)
        }
    };

    if let Some(kind) = degraded {
        warn!("Call degraded ({}), returning fallback value", kind);
    }

    Some(CallOutput { stdout, success })
}
