//! Swap-request repository implementation.
//!
//! Covers the whole aggregate: the request rows, the 1:1 scheduled
//! session, and the attached message thread.

use sqlx::PgPool;
use uuid::Uuid;

use skillswap_core::error::{AppError, ErrorKind};
use skillswap_core::result::AppResult;
use skillswap_core::types::pagination::{PageRequest, PageResponse};
use skillswap_entity::swap::message::{CreateMessage, Message};
use skillswap_entity::swap::model::CreateSwapRequest;
use skillswap_entity::swap::session::{ScheduledSession, UpsertSession};
use skillswap_entity::swap::{SwapRequest, SwapStatus};

/// Repository for swap requests, sessions, and messages.
#[derive(Debug, Clone)]
pub struct SwapRepository {
    pool: PgPool,
}

impl SwapRepository {
    /// Create a new swap repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new swap request (status starts PENDING).
    pub async fn create(&self, data: &CreateSwapRequest) -> AppResult<SwapRequest> {
        sqlx::query_as::<_, SwapRequest>(
            "INSERT INTO swap_requests \
             (requester_id, receiver_id, skill_offered, skill_requested, message, format, \
              duration_minutes, priority, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(data.requester_id)
        .bind(data.receiver_id)
        .bind(&data.skill_offered)
        .bind(&data.skill_requested)
        .bind(&data.message)
        .bind(data.format)
        .bind(data.duration_minutes)
        .bind(data.priority)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create swap request", e))
    }

    /// Find a swap request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SwapRequest>> {
        sqlx::query_as::<_, SwapRequest>("SELECT * FROM swap_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find swap request", e)
            })
    }

    /// Find a request between the pair, in either direction, whose status
    /// still blocks a new request (PENDING/ACCEPTED/SCHEDULED).
    pub async fn find_blocking_between(&self, a: Uuid, b: Uuid) -> AppResult<Option<SwapRequest>> {
        sqlx::query_as::<_, SwapRequest>(
            "SELECT * FROM swap_requests \
             WHERE ((requester_id = $1 AND receiver_id = $2) \
                 OR (requester_id = $2 AND receiver_id = $1)) \
               AND status IN ('pending', 'accepted', 'scheduled') \
             LIMIT 1",
        )
        .bind(a)
        .bind(b)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check for open request", e)
        })
    }

    /// List the user's swap requests, optionally filtered by direction
    /// (`"sent"` / `"received"`) and status.
    pub async fn find_for_user(
        &self,
        user_id: Uuid,
        role: Option<&str>,
        status: Option<SwapStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<SwapRequest>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM swap_requests \
             WHERE (requester_id = $1 OR receiver_id = $1) \
               AND ($2::text IS NULL \
                 OR ($2 = 'sent' AND requester_id = $1) \
                 OR ($2 = 'received' AND receiver_id = $1)) \
               AND ($3::swap_status IS NULL OR status = $3)",
        )
        .bind(user_id)
        .bind(role)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count swap requests", e)
        })?;

        let requests = sqlx::query_as::<_, SwapRequest>(
            "SELECT * FROM swap_requests \
             WHERE (requester_id = $1 OR receiver_id = $1) \
               AND ($2::text IS NULL \
                 OR ($2 = 'sent' AND requester_id = $1) \
                 OR ($2 = 'received' AND receiver_id = $1)) \
               AND ($3::swap_status IS NULL OR status = $3) \
             ORDER BY created_at DESC LIMIT $4 OFFSET $5",
        )
        .bind(user_id)
        .bind(role)
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list swap requests", e)
        })?;

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Write a new lifecycle status; completion also stamps `completed_at`.
    pub async fn set_status(&self, id: Uuid, status: SwapStatus) -> AppResult<SwapRequest> {
        sqlx::query_as::<_, SwapRequest>(
            "UPDATE swap_requests SET status = $2, updated_at = NOW(), \
                    completed_at = CASE WHEN $2 = 'completed'::swap_status \
                                        THEN NOW() ELSE completed_at END \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update status", e))?
        .ok_or_else(|| AppError::not_found(format!("Swap request {id} not found")))
    }

    /// Hard-delete a swap request (requester cancel).
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM swap_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete swap request", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Count completed swaps the user took part in.
    pub async fn count_completed_for(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM swap_requests \
             WHERE status = 'completed' AND (requester_id = $1 OR receiver_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count completed swaps", e)
        })
    }

    /// Fetch the scheduled session for a swap, if any.
    pub async fn find_session(&self, swap_id: Uuid) -> AppResult<Option<ScheduledSession>> {
        sqlx::query_as::<_, ScheduledSession>(
            "SELECT * FROM scheduled_sessions WHERE swap_request_id = $1",
        )
        .bind(swap_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Create or replace the 1:1 session for a swap.
    pub async fn upsert_session(&self, data: &UpsertSession) -> AppResult<ScheduledSession> {
        sqlx::query_as::<_, ScheduledSession>(
            "INSERT INTO scheduled_sessions (swap_request_id, scheduled_at, meeting_link, notes) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (swap_request_id) DO UPDATE \
                SET scheduled_at = $2, meeting_link = $3, notes = $4, updated_at = NOW() \
             RETURNING *",
        )
        .bind(data.swap_request_id)
        .bind(data.scheduled_at)
        .bind(&data.meeting_link)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert session", e))
    }

    /// Delete the session attached to a swap.
    pub async fn delete_session(&self, swap_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM scheduled_sessions WHERE swap_request_id = $1")
            .bind(swap_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Append a message to a swap's thread.
    pub async fn add_message(&self, data: &CreateMessage) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO swap_messages (swap_request_id, sender_id, body) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.swap_request_id)
        .bind(data.sender_id)
        .bind(&data.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add message", e))
    }

    /// List a swap's messages, oldest first.
    pub async fn find_messages(&self, swap_id: Uuid) -> AppResult<Vec<Message>> {
        sqlx::query_as::<_, Message>(
            "SELECT * FROM swap_messages WHERE swap_request_id = $1 ORDER BY created_at ASC",
        )
        .bind(swap_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list messages", e))
    }
}
