//! Swap-request lifecycle handler.
//!
//! Validates and persists state transitions and fans out the associated
//! side effects: notifications, meeting invites, completion credit
//! awards, and reputation recomputation. All precondition failures are
//! 4xx errors; side effects after the primary write are best-effort and
//! never roll it back.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use skillswap_core::config::swap::SwapConfig;
use skillswap_core::error::AppError;
use skillswap_core::types::pagination::{PageRequest, PageResponse};
use skillswap_database::repositories::swap::SwapRepository;
use skillswap_database::repositories::user::UserRepository;
use skillswap_entity::credit::CreditReason;
use skillswap_entity::notification::NotificationKind;
use skillswap_entity::swap::message::{CreateMessage, Message};
use skillswap_entity::swap::model::{CreateSwapRequest, SwapFormat, SwapPriority};
use skillswap_entity::swap::session::{ScheduledSession, UpsertSession};
use skillswap_entity::swap::{SwapRequest, SwapStatus};

use crate::context::RequestContext;
use crate::credit::CreditService;
use crate::meeting::{MeetingInvite, MeetingInviter};
use crate::notification::NotificationService;
use crate::reputation::ReputationService;

/// Input for creating a swap request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSwapRequest {
    /// Target user.
    pub receiver_id: Uuid,
    /// Skill the requester offers to teach.
    pub skill_offered: String,
    /// Skill the requester wants to learn.
    pub skill_requested: String,
    /// Optional introductory message.
    pub message: Option<String>,
    /// Exchange format.
    pub format: SwapFormat,
    /// Planned session length in minutes.
    pub duration_minutes: Option<i32>,
    /// Urgency.
    pub priority: SwapPriority,
    /// Explicit expiry; defaults to the configured window when absent.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Input for booking a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDetails {
    /// When the session takes place.
    pub scheduled_at: DateTime<Utc>,
    /// Optional video-call link.
    pub meeting_link: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// A swap request with its session and message thread.
#[derive(Debug, Clone, Serialize)]
pub struct SwapDetail {
    /// The request itself.
    pub request: SwapRequest,
    /// The booked session, if any.
    pub session: Option<ScheduledSession>,
    /// Messages appended through status updates.
    pub messages: Vec<Message>,
}

/// Validates and persists swap-request state transitions.
#[derive(Clone)]
pub struct SwapService {
    swap_repo: Arc<SwapRepository>,
    user_repo: Arc<UserRepository>,
    notifications: Arc<NotificationService>,
    credits: Arc<CreditService>,
    reputation: Arc<ReputationService>,
    inviter: Arc<dyn MeetingInviter>,
    config: SwapConfig,
}

impl SwapService {
    /// Creates a new swap service.
    pub fn new(
        swap_repo: Arc<SwapRepository>,
        user_repo: Arc<UserRepository>,
        notifications: Arc<NotificationService>,
        credits: Arc<CreditService>,
        reputation: Arc<ReputationService>,
        inviter: Arc<dyn MeetingInviter>,
        config: SwapConfig,
    ) -> Self {
        Self {
            swap_repo,
            user_repo,
            notifications,
            credits,
            reputation,
            inviter,
            config,
        }
    }

    /// Create a new swap request from the current user to `receiver_id`.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: NewSwapRequest,
    ) -> Result<SwapRequest, AppError> {
        if input.receiver_id == ctx.user_id {
            return Err(AppError::validation(
                "You cannot send a swap request to yourself",
            ));
        }

        let receiver = self
            .user_repo
            .find_by_id(input.receiver_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", input.receiver_id)))?;

        if !receiver.can_receive_requests() {
            return Err(AppError::validation(
                "This user is not accepting swap requests",
            ));
        }

        if let Some(expiry) = input.expires_at {
            if expiry <= Utc::now() {
                return Err(AppError::validation("Expiry must be in the future"));
            }
        }

        if self
            .swap_repo
            .find_blocking_between(ctx.user_id, receiver.id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "A pending request already exists between you and this user",
            ));
        }

        let expires_at = input
            .expires_at
            .unwrap_or_else(|| Utc::now() + Duration::days(self.config.default_expiry_days));

        let swap = self
            .swap_repo
            .create(&CreateSwapRequest {
                requester_id: ctx.user_id,
                receiver_id: receiver.id,
                skill_offered: input.skill_offered,
                skill_requested: input.skill_requested,
                message: input.message,
                format: input.format,
                duration_minutes: input.duration_minutes,
                priority: input.priority,
                expires_at: Some(expires_at),
            })
            .await?;

        info!(swap_id = %swap.id, requester = %ctx.user_id, receiver = %receiver.id, "Swap request created");

        self.notifications
            .notify(
                receiver.id,
                NotificationKind::SwapRequest,
                "New swap request",
                format!(
                    "{} offers {} in exchange for {}",
                    ctx.username, swap.skill_offered, swap.skill_requested
                ),
                Some(format!("/swap-requests/{}", swap.id)),
            )
            .await;

        Ok(swap)
    }

    /// List the current user's swap requests.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        role: Option<String>,
        status: Option<SwapStatus>,
        page: &PageRequest,
    ) -> Result<PageResponse<SwapRequest>, AppError> {
        if let Some(ref role) = role {
            if role != "sent" && role != "received" {
                return Err(AppError::validation(
                    "Role filter must be 'sent' or 'received'",
                ));
            }
        }
        self.swap_repo
            .find_for_user(ctx.user_id, role.as_deref(), status, page)
            .await
    }

    /// Fetch one swap request with its session and messages.
    /// Participants only.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<SwapDetail, AppError> {
        let swap = self.require(id).await?;
        if !swap.is_participant(ctx.user_id) {
            return Err(AppError::authorization(
                "Only a participant can view this swap request",
            ));
        }

        let (session, messages) = tokio::try_join!(
            self.swap_repo.find_session(id),
            self.swap_repo.find_messages(id),
        )?;

        Ok(SwapDetail {
            request: swap,
            session,
            messages,
        })
    }

    /// Accept a pending request. Receiver only.
    ///
    /// When `schedule` is present the session is booked in the same call
    /// and a meeting invite goes out best-effort: a failed send is
    /// logged, and acceptance still succeeds.
    pub async fn accept(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        schedule: Option<ScheduleDetails>,
    ) -> Result<SwapRequest, AppError> {
        let swap = self.require(id).await?;
        check_transition(&swap, ctx.user_id, SwapStatus::Accepted)?;

        let mut updated = self.swap_repo.set_status(id, SwapStatus::Accepted).await?;
        info!(swap_id = %id, receiver = %ctx.user_id, "Swap request accepted");

        self.notifications
            .notify(
                swap.requester_id,
                NotificationKind::SwapAccepted,
                "Swap request accepted",
                format!("{} accepted your swap request", ctx.username),
                Some(format!("/swap-requests/{id}")),
            )
            .await;

        if let Some(details) = schedule {
            let session = self
                .swap_repo
                .upsert_session(&UpsertSession {
                    swap_request_id: id,
                    scheduled_at: details.scheduled_at,
                    meeting_link: details.meeting_link,
                    notes: details.notes,
                })
                .await?;
            updated = self.swap_repo.set_status(id, SwapStatus::Scheduled).await?;
            self.send_invite_best_effort(&updated, &session).await;
        }

        Ok(updated)
    }

    /// Decline a pending request. Receiver only.
    pub async fn decline(&self, ctx: &RequestContext, id: Uuid) -> Result<SwapRequest, AppError> {
        let swap = self.require(id).await?;
        check_transition(&swap, ctx.user_id, SwapStatus::Declined)?;

        let updated = self.swap_repo.set_status(id, SwapStatus::Declined).await?;
        info!(swap_id = %id, receiver = %ctx.user_id, "Swap request declined");

        self.notifications
            .notify(
                swap.requester_id,
                NotificationKind::SwapDeclined,
                "Swap request declined",
                format!("{} declined your swap request", ctx.username),
                None,
            )
            .await;

        Ok(updated)
    }

    /// Cancel (hard-delete) a request. Requester only, while the request
    /// is still open.
    pub async fn cancel(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let swap = self.require(id).await?;

        if swap.requester_id != ctx.user_id {
            return Err(AppError::authorization(
                "Only the requester can cancel a swap request",
            ));
        }
        if !swap.status.cancellable() {
            return Err(AppError::validation(format!(
                "A {} request cannot be cancelled",
                swap.status
            )));
        }

        self.swap_repo.delete(id).await?;
        info!(swap_id = %id, requester = %ctx.user_id, "Swap request cancelled");

        self.notifications
            .notify(
                swap.receiver_id,
                NotificationKind::SwapCancelled,
                "Swap request cancelled",
                format!("{} cancelled their swap request", ctx.username),
                None,
            )
            .await;

        Ok(())
    }

    /// Generic status update enforcing the same per-status permission
    /// rules as the dedicated endpoints, with an optional message
    /// appended to the swap's thread.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        target: SwapStatus,
        message: Option<String>,
    ) -> Result<SwapRequest, AppError> {
        let swap = self.require(id).await?;
        check_transition(&swap, ctx.user_id, target)?;

        if let Some(body) = message.filter(|m| !m.trim().is_empty()) {
            self.swap_repo
                .add_message(&CreateMessage {
                    swap_request_id: id,
                    sender_id: ctx.user_id,
                    body,
                })
                .await?;
        }

        let updated = self.swap_repo.set_status(id, target).await?;
        info!(swap_id = %id, status = %target, actor = %ctx.user_id, "Swap status updated");

        match target {
            SwapStatus::Accepted => {
                self.notifications
                    .notify(
                        swap.requester_id,
                        NotificationKind::SwapAccepted,
                        "Swap request accepted",
                        format!("{} accepted your swap request", ctx.username),
                        Some(format!("/swap-requests/{id}")),
                    )
                    .await;
            }
            SwapStatus::Declined => {
                self.notifications
                    .notify(
                        swap.requester_id,
                        NotificationKind::SwapDeclined,
                        "Swap request declined",
                        format!("{} declined your swap request", ctx.username),
                        None,
                    )
                    .await;
            }
            SwapStatus::Completed => self.completion_side_effects(ctx, &updated).await,
            SwapStatus::Pending | SwapStatus::Scheduled => {}
        }

        Ok(updated)
    }

    /// Book or rebook the session for an accepted swap. Participants only.
    pub async fn schedule(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        details: ScheduleDetails,
    ) -> Result<SwapDetail, AppError> {
        let swap = self.require(id).await?;
        if !swap.is_participant(ctx.user_id) {
            return Err(AppError::authorization(
                "Only a participant can schedule a session",
            ));
        }
        if !matches!(swap.status, SwapStatus::Accepted | SwapStatus::Scheduled) {
            return Err(AppError::validation(format!(
                "Only an accepted swap can be scheduled; this one is {}",
                swap.status
            )));
        }

        let session = self
            .swap_repo
            .upsert_session(&UpsertSession {
                swap_request_id: id,
                scheduled_at: details.scheduled_at,
                meeting_link: details.meeting_link,
                notes: details.notes,
            })
            .await?;

        let updated = if swap.status == SwapStatus::Accepted {
            self.swap_repo.set_status(id, SwapStatus::Scheduled).await?
        } else {
            swap
        };

        info!(swap_id = %id, scheduled_at = %session.scheduled_at, "Session scheduled");

        if let Some(counterpart) = updated.counterpart_of(ctx.user_id) {
            self.notifications
                .notify(
                    counterpart,
                    NotificationKind::SessionScheduled,
                    "Session scheduled",
                    format!(
                        "{} scheduled your session for {}",
                        ctx.username, session.scheduled_at
                    ),
                    Some(format!("/swap-requests/{id}")),
                )
                .await;
        }

        self.send_invite_best_effort(&updated, &session).await;

        Ok(SwapDetail {
            request: updated,
            session: Some(session),
            messages: Vec::new(),
        })
    }

    /// Cancel the booked session, reverting SCHEDULED back to ACCEPTED.
    /// Participants only.
    pub async fn cancel_schedule(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<SwapRequest, AppError> {
        let swap = self.require(id).await?;
        if !swap.is_participant(ctx.user_id) {
            return Err(AppError::authorization(
                "Only a participant can cancel a session",
            ));
        }
        if swap.status != SwapStatus::Scheduled {
            return Err(AppError::validation(
                "This swap has no scheduled session",
            ));
        }

        self.swap_repo.delete_session(id).await?;
        let updated = self.swap_repo.set_status(id, SwapStatus::Accepted).await?;
        info!(swap_id = %id, "Session cancelled");

        if let Some(counterpart) = updated.counterpart_of(ctx.user_id) {
            self.notifications
                .notify(
                    counterpart,
                    NotificationKind::SessionCancelled,
                    "Session cancelled",
                    format!("{} cancelled your scheduled session", ctx.username),
                    Some(format!("/swap-requests/{id}")),
                )
                .await;
        }

        Ok(updated)
    }

    async fn require(&self, id: Uuid) -> Result<SwapRequest, AppError> {
        self.swap_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Swap request {id} not found")))
    }

    /// Completion fan-out: credit awards, reputation recomputation, and a
    /// notification to the counterpart. Each effect is best-effort; a
    /// failure after the status write is logged, not compensated.
    async fn completion_side_effects(&self, ctx: &RequestContext, swap: &SwapRequest) {
        for user_id in [swap.requester_id, swap.receiver_id] {
            if self.config.completion_award > 0 {
                if let Err(e) = self
                    .credits
                    .award(
                        user_id,
                        self.config.completion_award,
                        CreditReason::SwapCompleted,
                        Some("Swap completed"),
                    )
                    .await
                {
                    warn!(swap_id = %swap.id, user_id = %user_id, error = %e, "Failed to award completion credits");
                }
            }
            if let Err(e) = self.reputation.recompute(user_id).await {
                warn!(swap_id = %swap.id, user_id = %user_id, error = %e, "Failed to recompute reputation");
            }
        }

        if let Some(counterpart) = swap.counterpart_of(ctx.user_id) {
            self.notifications
                .notify(
                    counterpart,
                    NotificationKind::SwapCompleted,
                    "Swap completed",
                    format!("{} marked your swap as completed", ctx.username),
                    Some(format!("/swap-requests/{}", swap.id)),
                )
                .await;
        }
    }

    /// Send a meeting invite through the email collaborator. Failure is
    /// logged and ignored; the primary operation has already succeeded.
    async fn send_invite_best_effort(&self, swap: &SwapRequest, session: &ScheduledSession) {
        let users = tokio::try_join!(
            self.user_repo.find_by_id(swap.requester_id),
            self.user_repo.find_by_id(swap.receiver_id),
        );

        let (requester, receiver) = match users {
            Ok((Some(requester), Some(receiver))) => (requester, receiver),
            Ok(_) => {
                warn!(swap_id = %swap.id, "Participant vanished before invite could be built");
                return;
            }
            Err(e) => {
                warn!(swap_id = %swap.id, error = %e, "Failed to load participants for invite");
                return;
            }
        };

        let invite = MeetingInvite {
            swap_request_id: swap.id,
            organizer_email: receiver.email,
            attendee_email: requester.email,
            skill_offered: swap.skill_offered.clone(),
            skill_requested: swap.skill_requested.clone(),
            scheduled_at: session.scheduled_at,
            meeting_link: session.meeting_link.clone(),
        };

        match self.inviter.send_invite(&invite).await {
            Ok(true) => debug!(swap_id = %swap.id, "Meeting invite sent"),
            Ok(false) => debug!(swap_id = %swap.id, "Meeting invites disabled; skipping"),
            Err(e) => warn!(swap_id = %swap.id, error = %e, "Failed to send meeting invite"),
        }
    }
}

impl std::fmt::Debug for SwapService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Per-status permission and precondition rules shared by the dedicated
/// accept/decline endpoints and the generic status update.
fn check_transition(swap: &SwapRequest, actor: Uuid, target: SwapStatus) -> Result<(), AppError> {
    match target {
        SwapStatus::Accepted | SwapStatus::Declined => {
            if swap.receiver_id != actor {
                return Err(AppError::authorization(
                    "Only the receiver can accept or decline a swap request",
                ));
            }
            if swap.status != SwapStatus::Pending {
                return Err(AppError::validation(format!(
                    "Only a pending request can be {}; this one is {}",
                    if target == SwapStatus::Accepted {
                        "accepted"
                    } else {
                        "declined"
                    },
                    swap.status
                )));
            }
            Ok(())
        }
        SwapStatus::Completed => {
            if !swap.is_participant(actor) {
                return Err(AppError::authorization(
                    "Only a participant can complete a swap",
                ));
            }
            if !matches!(swap.status, SwapStatus::Accepted | SwapStatus::Scheduled) {
                return Err(AppError::validation(format!(
                    "Only an accepted or scheduled swap can be completed; this one is {}",
                    swap.status
                )));
            }
            Ok(())
        }
        SwapStatus::Pending => Err(AppError::validation(
            "A request cannot be moved back to pending",
        )),
        SwapStatus::Scheduled => Err(AppError::validation(
            "Use the schedule endpoint to book a session",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillswap_core::error::ErrorKind;

    fn swap(status: SwapStatus) -> (SwapRequest, Uuid, Uuid) {
        let requester = Uuid::new_v4();
        let receiver = Uuid::new_v4();
        let swap = SwapRequest {
            id: Uuid::new_v4(),
            requester_id: requester,
            receiver_id: receiver,
            skill_offered: "Guitar".to_string(),
            skill_requested: "Spanish".to_string(),
            message: None,
            format: SwapFormat::Video,
            duration_minutes: Some(60),
            priority: SwapPriority::Medium,
            status,
            expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            completed_at: None,
        };
        (swap, requester, receiver)
    }

    #[test]
    fn test_only_receiver_accepts() {
        let (swap, requester, receiver) = swap(SwapStatus::Pending);

        let err = check_transition(&swap, requester, SwapStatus::Accepted).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        let err = check_transition(&swap, Uuid::new_v4(), SwapStatus::Declined).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        assert!(check_transition(&swap, receiver, SwapStatus::Accepted).is_ok());
        assert!(check_transition(&swap, receiver, SwapStatus::Declined).is_ok());
    }

    #[test]
    fn test_accept_requires_pending() {
        for status in [
            SwapStatus::Accepted,
            SwapStatus::Declined,
            SwapStatus::Scheduled,
            SwapStatus::Completed,
        ] {
            let (swap, _, receiver) = swap(status);
            let err = check_transition(&swap, receiver, SwapStatus::Accepted).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
    }

    #[test]
    fn test_completion_from_accepted_or_scheduled() {
        let (swap_accepted, requester, receiver) = swap(SwapStatus::Accepted);
        assert!(check_transition(&swap_accepted, requester, SwapStatus::Completed).is_ok());
        assert!(check_transition(&swap_accepted, receiver, SwapStatus::Completed).is_ok());

        let (swap_scheduled, requester, _) = swap(SwapStatus::Scheduled);
        assert!(check_transition(&swap_scheduled, requester, SwapStatus::Completed).is_ok());

        let (swap_pending, requester, _) = swap(SwapStatus::Pending);
        let err = check_transition(&swap_pending, requester, SwapStatus::Completed).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_completion_requires_participant() {
        let (swap, _, _) = swap(SwapStatus::Accepted);
        let err = check_transition(&swap, Uuid::new_v4(), SwapStatus::Completed).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_invalid_targets_rejected() {
        let (swap, _, receiver) = swap(SwapStatus::Pending);
        assert_eq!(
            check_transition(&swap, receiver, SwapStatus::Pending)
                .unwrap_err()
                .kind,
            ErrorKind::Validation
        );
        assert_eq!(
            check_transition(&swap, receiver, SwapStatus::Scheduled)
                .unwrap_err()
                .kind,
            ErrorKind::Validation
        );
    }
}
