//! Credit repository implementation.
//!
//! The transfer is the sole multi-statement atomic unit in the system:
//! a single database transaction keeps the two-sided balance update and
//! its ledger rows consistent.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_core::types::pagination::{PageRequest, PageResponse};
use skillswap_entity::credit::{CreditBalance, CreditReason, CreditTransaction};

/// Repository for credit balances and the append-only ledger.
#[derive(Debug, Clone)]
pub struct CreditRepository {
    pool: PgPool,
}

impl CreditRepository {
    /// Create a new credit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a user's balance.
    pub async fn find_balance(&self, user_id: Uuid) -> AppResult<Option<CreditBalance>> {
        sqlx::query_as::<_, CreditBalance>("SELECT * FROM credit_balances WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find balance", e))
    }

    /// List a user's ledger history, newest first.
    pub async fn find_transactions(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CreditTransaction>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM credit_transactions WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count transactions", e)
                })?;

        let transactions = sqlx::query_as::<_, CreditTransaction>(
            "SELECT * FROM credit_transactions WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list transactions", e))?;

        Ok(PageResponse::new(
            transactions,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Unilaterally award credits: increment earned + balance, append one
    /// ledger row. One transaction.
    pub async fn award(
        &self,
        user_id: Uuid,
        amount: i64,
        reason: CreditReason,
        note: Option<&str>,
    ) -> AppResult<CreditBalance> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let balance = sqlx::query_as::<_, CreditBalance>(
            "UPDATE credit_balances \
             SET balance = balance + $2, earned = earned + $2, updated_at = NOW() \
             WHERE user_id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(amount)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to award credits", e))?
        .ok_or_else(|| AppError::not_found(format!("Credit balance for user {user_id} not found")))?;

        sqlx::query(
            "INSERT INTO credit_transactions (user_id, amount, reason, note) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(amount)
        .bind(reason)
        .bind(note)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record award", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit award", e))?;

        Ok(balance)
    }

    /// Transfer credits between two users.
    ///
    /// Debits the sender only when the balance covers the amount;
    /// otherwise the transaction rolls back and neither balance changes.
    pub async fn transfer(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        amount: i64,
        note: Option<&str>,
    ) -> AppResult<CreditBalance> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let sender_balance = sqlx::query_as::<_, CreditBalance>(
            "UPDATE credit_balances \
             SET balance = balance - $2, spent = spent + $2, updated_at = NOW() \
             WHERE user_id = $1 AND balance >= $2 RETURNING *",
        )
        .bind(sender_id)
        .bind(amount)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to debit sender", e))?
        .ok_or_else(|| {
            AppError::insufficient_funds("Insufficient credits to complete the transfer")
        })?;

        let credited = sqlx::query(
            "UPDATE credit_balances \
             SET balance = balance + $2, earned = earned + $2, updated_at = NOW() \
             WHERE user_id = $1",
        )
        .bind(receiver_id)
        .bind(amount)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to credit receiver", e))?;

        if credited.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Credit balance for user {receiver_id} not found"
            )));
        }

        sqlx::query(
            "INSERT INTO credit_transactions (user_id, amount, reason, counterpart_id, note) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(sender_id)
        .bind(-amount)
        .bind(CreditReason::TransferOut)
        .bind(receiver_id)
        .bind(note)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record debit", e))?;

        sqlx::query(
            "INSERT INTO credit_transactions (user_id, amount, reason, counterpart_id, note) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(receiver_id)
        .bind(amount)
        .bind(CreditReason::TransferIn)
        .bind(sender_id)
        .bind(note)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record credit", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transfer", e)
        })?;

        Ok(sender_balance)
    }
}
