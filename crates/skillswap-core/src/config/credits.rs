//! Credit ledger configuration.

use serde::{Deserialize, Serialize};

/// Settings for the credit ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditsConfig {
    /// Credits granted to a freshly registered user.
    #[serde(default = "default_signup_bonus")]
    pub signup_bonus: i64,
}

impl Default for CreditsConfig {
    fn default() -> Self {
        Self {
            signup_bonus: default_signup_bonus(),
        }
    }
}

fn default_signup_bonus() -> i64 {
    25
}
