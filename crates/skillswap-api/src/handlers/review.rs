//! Review handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use skillswap_core::types::pagination::PageResponse;
use skillswap_entity::review::model::UpdateReview;
use skillswap_entity::review::Review;
use skillswap_service::review::NewReview;

use crate::dto;
use crate::dto::request::{CreateReviewRequest, UpdateReviewRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/swap-requests/{id}/reviews
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(swap_id): Path<Uuid>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Review>>), ApiError> {
    dto::validate(&req)?;

    let review = state
        .review_service
        .create(
            &auth,
            swap_id,
            NewReview {
                overall: req.overall,
                teaching_quality: req.teaching_quality,
                reliability: req.reliability,
                communication: req.communication,
                comment: req.comment,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(review))))
}

/// PUT /api/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateReviewRequest>,
) -> Result<Json<ApiResponse<Review>>, ApiError> {
    let review = state
        .review_service
        .update(
            &auth,
            id,
            UpdateReview {
                overall: req.overall,
                teaching_quality: req.teaching_quality,
                reliability: req.reliability,
                communication: req.communication,
                comment: req.comment,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(review)))
}

/// DELETE /api/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.review_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Review deleted"))))
}

/// GET /api/users/{id}/reviews
pub async fn list_for_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Review>>>, ApiError> {
    let page = params.into_page_request();
    let reviews = state.review_service.list_for_user(user_id, &page).await?;
    Ok(Json(ApiResponse::ok(reviews)))
}
