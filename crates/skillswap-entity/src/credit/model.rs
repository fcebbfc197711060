//! Credit balance and ledger entity models.
//!
//! The balance is mutated only through paired debit/credit operations
//! (transfers) or unilateral awards; every mutation appends a ledger row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Why a ledger row was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "credit_reason", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CreditReason {
    /// Bonus seeded at registration.
    SignupBonus,
    /// Engagement award for completing a swap.
    SwapCompleted,
    /// Received through a transfer.
    TransferIn,
    /// Sent through a transfer.
    TransferOut,
}

impl CreditReason {
    /// Return the reason as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignupBonus => "signup_bonus",
            Self::SwapCompleted => "swap_completed",
            Self::TransferIn => "transfer_in",
            Self::TransferOut => "transfer_out",
        }
    }
}

impl fmt::Display for CreditReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CreditReason {
    type Err = skillswap_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "signup_bonus" => Ok(Self::SignupBonus),
            "swap_completed" => Ok(Self::SwapCompleted),
            "transfer_in" => Ok(Self::TransferIn),
            "transfer_out" => Ok(Self::TransferOut),
            _ => Err(skillswap_core::AppError::validation(format!(
                "Invalid credit reason: '{s}'"
            ))),
        }
    }
}

/// Per-user credit balance.
///
/// `balance` always equals `earned - spent` at the sum-of-transactions
/// level; the transfer transaction is the only multi-statement atomic
/// unit maintaining it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CreditBalance {
    /// Owning user.
    pub user_id: Uuid,
    /// Spendable credits.
    pub balance: i64,
    /// Lifetime credits earned.
    pub earned: i64,
    /// Lifetime credits spent.
    pub spent: i64,
    /// When the balance was last touched.
    pub updated_at: DateTime<Utc>,
}

/// One row of the append-only credit ledger.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CreditTransaction {
    /// Unique identifier.
    pub id: Uuid,
    /// The user whose balance moved.
    pub user_id: Uuid,
    /// Signed amount: positive for credits in, negative for credits out.
    pub amount: i64,
    /// Why the row was written.
    pub reason: CreditReason,
    /// The other party, for transfers.
    pub counterpart_id: Option<Uuid>,
    /// Optional free-text note.
    pub note: Option<String>,
    /// When the row was written.
    pub created_at: DateTime<Utc>,
}
