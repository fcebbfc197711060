//! Credit ledger orchestration: balance reads, awards, and transfers.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_core::types::pagination::{PageRequest, PageResponse};
use skillswap_database::repositories::credit::CreditRepository;
use skillswap_database::repositories::user::UserRepository;
use skillswap_entity::credit::{CreditBalance, CreditReason, CreditTransaction};
use skillswap_entity::notification::NotificationKind;

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// Maintains per-user balances and the append-only transaction history.
#[derive(Debug, Clone)]
pub struct CreditService {
    credit_repo: Arc<CreditRepository>,
    user_repo: Arc<UserRepository>,
    notifications: Arc<NotificationService>,
}

impl CreditService {
    /// Creates a new credit service.
    pub fn new(
        credit_repo: Arc<CreditRepository>,
        user_repo: Arc<UserRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            credit_repo,
            user_repo,
            notifications,
        }
    }

    /// The current user's balance summary.
    pub async fn summary(&self, ctx: &RequestContext) -> Result<CreditBalance, AppError> {
        self.credit_repo
            .find_balance(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Credit balance not found"))
    }

    /// The current user's ledger history.
    pub async fn transactions(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<CreditTransaction>, AppError> {
        self.credit_repo.find_transactions(ctx.user_id, page).await
    }

    /// Transfer credits from the current user to another.
    ///
    /// The paired debit/credit and both ledger rows happen inside one
    /// database transaction; the notification to the receiver is a
    /// best-effort side effect outside it.
    pub async fn transfer(
        &self,
        ctx: &RequestContext,
        receiver_id: Uuid,
        amount: i64,
        note: Option<String>,
    ) -> Result<CreditBalance, AppError> {
        if amount <= 0 {
            return Err(AppError::validation("Transfer amount must be positive"));
        }
        if receiver_id == ctx.user_id {
            return Err(AppError::validation(
                "You cannot transfer credits to yourself",
            ));
        }

        let receiver = self
            .user_repo
            .find_by_id(receiver_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {receiver_id} not found")))?;

        let balance = self
            .credit_repo
            .transfer(ctx.user_id, receiver.id, amount, note.as_deref())
            .await?;

        info!(
            sender = %ctx.user_id,
            receiver = %receiver.id,
            amount,
            "Credits transferred"
        );

        self.notifications
            .notify(
                receiver.id,
                NotificationKind::CreditsReceived,
                "Credits received",
                format!("{} sent you {amount} credits", ctx.username),
                Some("/credits".to_string()),
            )
            .await;

        Ok(balance)
    }

    /// Unilateral engagement award (signup bonus is seeded at
    /// registration; this path covers swap completion).
    pub async fn award(
        &self,
        user_id: Uuid,
        amount: i64,
        reason: CreditReason,
        note: Option<&str>,
    ) -> Result<CreditBalance, AppError> {
        self.credit_repo.award(user_id, amount, reason, note).await
    }
}
