//! Notification CRUD and the fire-and-forget fan-out entry point.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use skillswap_core::error::AppError;
use skillswap_core::types::pagination::{PageRequest, PageResponse};
use skillswap_database::repositories::notification::NotificationRepository;
use skillswap_entity::notification::model::CreateNotification;
use skillswap_entity::notification::{Notification, NotificationKind};

use crate::context::RequestContext;

/// Manages user notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Lists undismissed notifications for the current user.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notif_repo.find_by_user(ctx.user_id, page).await
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notif_repo.count_unread(ctx.user_id).await
    }

    /// Marks a notification as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> Result<(), AppError> {
        self.notif_repo.mark_read(notification_id, ctx.user_id).await
    }

    /// Marks all notifications as read for the current user.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notif_repo.mark_all_read(ctx.user_id).await
    }

    /// Dismisses (soft-deletes) a notification.
    pub async fn dismiss(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> Result<(), AppError> {
        self.notif_repo.dismiss(notification_id, ctx.user_id).await
    }

    /// Fire-and-forget notification insert.
    ///
    /// Called as a side effect of state transitions. A failed insert is
    /// logged and swallowed: it never rolls back or fails the primary
    /// operation that triggered it.
    pub async fn notify(
        &self,
        user_id: Uuid,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
        action_url: Option<String>,
    ) {
        let data = CreateNotification {
            user_id,
            kind,
            title: title.into(),
            body: body.into(),
            action_url,
        };
        if let Err(e) = self.notif_repo.create(&data).await {
            warn!(user_id = %user_id, kind = %kind, error = %e, "Failed to create notification");
        }
    }
}
