//! JWT claim structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a token grants access or only refresh rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived token sent on every request.
    Access,
    /// Long-lived token exchanged for new pairs.
    Refresh,
}

/// Claims carried by every Skill Swap JWT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's ID.
    pub sub: Uuid,
    /// The username at issue time (convenience field).
    pub username: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    /// Unique token ID.
    pub jti: Uuid,
    /// Access or refresh.
    pub token_type: TokenType,
}

impl Claims {
    /// The authenticated user's ID.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}
