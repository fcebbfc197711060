//! Meeting-invite collaborator configuration.

use serde::{Deserialize, Serialize};

/// Settings for the outbound meeting-invite gateway.
///
/// When disabled, invite sends become no-ops; the lifecycle never depends
/// on the gateway being reachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingConfig {
    /// Whether invite sending is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// HTTP endpoint of the invite gateway.
    #[serde(default)]
    pub gateway_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MeetingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            gateway_url: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    5
}
