//! Response type definitions
//!
//! Defines the payloads handed back to the host.

use serde::{Deserialize, Serialize};

/// Reduced two-key view of the config consumed by the launch hooks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    /// Options appended to every game's launch command
    #[serde(rename = "globalLaunchOptions")]
    pub global_launch_options: String,

    /// Games the options are not applied to
    #[serde(rename = "excludedGameIds")]
    pub excluded_game_ids: String,
}

impl HookConfig {
    /// Create a new hook config
    pub fn new(
        global_launch_options: impl Into<String>,
        excluded_game_ids: impl Into<String>,
    ) -> Self {
        Self {
            global_launch_options: global_launch_options.into(),
            excluded_game_ids: excluded_game_ids.into(),
        }
    }

    /// Compact JSON string, as returned by `get_hook_config`
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"globalLaunchOptions":"","excludedGameIds":""}"#.to_string())
    }
}

/// Ping response for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Bridge uptime in seconds
    pub server_uptime: u64,

    /// Backend version
    pub version: String,
}

impl PingResponse {
    /// Create a new ping response
    pub fn new(server_uptime: u64, version: impl Into<String>) -> Self {
        Self {
            server_uptime,
            version: version.into(),
        }
    }
}
