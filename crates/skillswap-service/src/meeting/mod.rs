//! Meeting-invite collaborator.
//!
//! The lifecycle treats invite delivery as a best-effort side effect: a
//! failed send is logged by the caller and never propagated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skillswap_core::config::meeting::MeetingConfig;
use skillswap_core::error::AppError;
use skillswap_core::result::AppResult;

/// Details sent to the invite gateway when a session is booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingInvite {
    /// The swap the session belongs to.
    pub swap_request_id: Uuid,
    /// Organizer (the accepting side) email.
    pub organizer_email: String,
    /// Attendee email.
    pub attendee_email: String,
    /// Skill taught by the requester.
    pub skill_offered: String,
    /// Skill taught by the receiver.
    pub skill_requested: String,
    /// When the session takes place.
    pub scheduled_at: DateTime<Utc>,
    /// Optional video-call link.
    pub meeting_link: Option<String>,
}

/// Outbound invite delivery.
///
/// Implementations must be cheap to call and safe to fail: callers log
/// errors and carry on.
#[async_trait]
pub trait MeetingInviter: Send + Sync {
    /// Send an invite. Returns whether anything was actually sent.
    async fn send_invite(&self, invite: &MeetingInvite) -> AppResult<bool>;
}

/// Posts invites to an HTTP gateway as JSON.
#[derive(Debug, Clone)]
pub struct HttpMeetingInviter {
    client: reqwest::Client,
    gateway_url: String,
}

impl HttpMeetingInviter {
    /// Creates an inviter from meeting configuration.
    pub fn new(config: &MeetingConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build invite HTTP client: {e}"))
            })?;
        Ok(Self {
            client,
            gateway_url: config.gateway_url.clone(),
        })
    }
}

#[async_trait]
impl MeetingInviter for HttpMeetingInviter {
    async fn send_invite(&self, invite: &MeetingInvite) -> AppResult<bool> {
        let response = self
            .client
            .post(&self.gateway_url)
            .json(invite)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("Invite gateway unreachable: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Invite gateway returned {}",
                response.status()
            )));
        }

        Ok(true)
    }
}

/// No-op inviter used when the gateway is disabled by configuration.
#[derive(Debug, Clone, Default)]
pub struct DisabledMeetingInviter;

#[async_trait]
impl MeetingInviter for DisabledMeetingInviter {
    async fn send_invite(&self, _invite: &MeetingInvite) -> AppResult<bool> {
        Ok(false)
    }
}
