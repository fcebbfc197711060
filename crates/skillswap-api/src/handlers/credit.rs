//! Credit ledger handlers.

use axum::extract::{Query, State};
use axum::Json;

use skillswap_core::types::pagination::PageResponse;
use skillswap_entity::credit::{CreditBalance, CreditTransaction};

use crate::dto;
use crate::dto::request::TransferCreditsRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/credits
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CreditBalance>>, ApiError> {
    let balance = state.credit_service.summary(&auth).await?;
    Ok(Json(ApiResponse::ok(balance)))
}

/// GET /api/credits/transactions
pub async fn transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<CreditTransaction>>>, ApiError> {
    let page = params.into_page_request();
    let history = state.credit_service.transactions(&auth, &page).await?;
    Ok(Json(ApiResponse::ok(history)))
}

/// POST /api/credits/transfer
pub async fn transfer(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<TransferCreditsRequest>,
) -> Result<Json<ApiResponse<CreditBalance>>, ApiError> {
    dto::validate(&req)?;

    let balance = state
        .credit_service
        .transfer(&auth, req.receiver_id, req.amount, req.note)
        .await?;
    Ok(Json(ApiResponse::ok(balance)))
}
