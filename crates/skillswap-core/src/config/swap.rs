//! Swap-request lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Settings governing the swap-request lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Default number of days before a new request expires.
    #[serde(default = "default_expiry_days")]
    pub default_expiry_days: i64,
    /// Credits awarded to each participant when a swap completes.
    #[serde(default = "default_completion_award")]
    pub completion_award: i64,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            default_expiry_days: default_expiry_days(),
            completion_award: default_completion_award(),
        }
    }
}

fn default_expiry_days() -> i64 {
    7
}

fn default_completion_award() -> i64 {
    10
}
