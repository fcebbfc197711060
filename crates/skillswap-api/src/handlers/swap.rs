//! Swap-request lifecycle handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use skillswap_core::types::pagination::{PageRequest, PageResponse};
use skillswap_entity::swap::{SwapFormat, SwapPriority, SwapRequest, SwapStatus};
use skillswap_service::swap::{NewSwapRequest, ScheduleDetails, SwapDetail};

use crate::dto;
use crate::dto::request::{
    AcceptSwapRequestBody, CreateSwapRequestBody, ScheduleSessionRequest, UpdateSwapStatusRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

impl From<ScheduleSessionRequest> for ScheduleDetails {
    fn from(req: ScheduleSessionRequest) -> Self {
        Self {
            scheduled_at: req.scheduled_at,
            meeting_link: req.meeting_link,
            notes: req.notes,
        }
    }
}

/// POST /api/swap-requests
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSwapRequestBody>,
) -> Result<(StatusCode, Json<ApiResponse<SwapRequest>>), ApiError> {
    dto::validate(&req)?;

    let format = req
        .format
        .as_deref()
        .map(str::parse)
        .transpose()?
        .unwrap_or(SwapFormat::Video);
    let priority = req
        .priority
        .as_deref()
        .map(str::parse)
        .transpose()?
        .unwrap_or(SwapPriority::Medium);

    let swap = state
        .swap_service
        .create(
            &auth,
            NewSwapRequest {
                receiver_id: req.receiver_id,
                skill_offered: req.skill_offered,
                skill_requested: req.skill_requested,
                message: req.message,
                format,
                duration_minutes: req.duration_minutes,
                priority,
                expires_at: req.expires_at,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(swap))))
}

/// Query parameters for listing swap requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSwapParams {
    /// Direction filter: `sent` or `received`.
    pub role: Option<String>,
    /// Status filter.
    pub status: Option<String>,
    /// 1-based page number.
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

/// GET /api/swap-requests
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListSwapParams>,
) -> Result<Json<ApiResponse<PageResponse<SwapRequest>>>, ApiError> {
    let status: Option<SwapStatus> = params.status.as_deref().map(str::parse).transpose()?;
    let defaults = PageRequest::default();
    let page = PageRequest::new(
        params.page.unwrap_or(defaults.page),
        params.page_size.unwrap_or(defaults.page_size),
    );

    let result = state
        .swap_service
        .list(&auth, params.role, status, &page)
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/swap-requests/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SwapDetail>>, ApiError> {
    let detail = state.swap_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// POST /api/swap-requests/{id}/accept
///
/// The body is optional; when present it may carry session details to
/// book in the same call.
pub async fn accept(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    body: Result<Json<AcceptSwapRequestBody>, JsonRejection>,
) -> Result<Json<ApiResponse<SwapRequest>>, ApiError> {
    let schedule = body
        .ok()
        .and_then(|Json(b)| b.schedule)
        .map(ScheduleDetails::from);

    let swap = state.swap_service.accept(&auth, id, schedule).await?;
    Ok(Json(ApiResponse::ok(swap)))
}

/// POST /api/swap-requests/{id}/decline
pub async fn decline(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SwapRequest>>, ApiError> {
    let swap = state.swap_service.decline(&auth, id).await?;
    Ok(Json(ApiResponse::ok(swap)))
}

/// PUT /api/swap-requests/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSwapStatusRequest>,
) -> Result<Json<ApiResponse<SwapRequest>>, ApiError> {
    let target: SwapStatus = req.status.parse()?;
    let swap = state
        .swap_service
        .update_status(&auth, id, target, req.message)
        .await?;
    Ok(Json(ApiResponse::ok(swap)))
}

/// DELETE /api/swap-requests/{id}
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.swap_service.cancel(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Swap request cancelled",
    ))))
}

/// POST /api/swap-requests/{id}/schedule
pub async fn schedule(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ScheduleSessionRequest>,
) -> Result<Json<ApiResponse<SwapDetail>>, ApiError> {
    let detail = state.swap_service.schedule(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// DELETE /api/swap-requests/{id}/schedule
pub async fn cancel_schedule(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SwapRequest>>, ApiError> {
    let swap = state.swap_service.cancel_schedule(&auth, id).await?;
    Ok(Json(ApiResponse::ok(swap)))
}
