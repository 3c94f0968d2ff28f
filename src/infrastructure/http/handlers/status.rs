//! Status HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::{CreateStatusCheck, ListStatusChecks};
use crate::infrastructure::http::dto::{CreateStatusCheckRequest, StatusCheckResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建状态检查记录
pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    request: Result<Json<CreateStatusCheckRequest>, JsonRejection>,
) -> Result<Json<StatusCheckResponse>, ApiError> {
    let Json(request) = request?;

    let check = state
        .create_status_check_handler
        .handle(CreateStatusCheck {
            client_name: request.client_name,
        })
        .await
        .map_err(|e| ApiError::from_application(e, "Failed to create status check"))?;

    Ok(Json(check.into()))
}

/// 列出状态检查记录
pub async fn list_status_checks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StatusCheckResponse>>, ApiError> {
    let checks = state
        .list_status_checks_handler
        .handle(ListStatusChecks)
        .await
        .map_err(|e| ApiError::from_application(e, "Failed to list status checks"))?;

    Ok(Json(checks.into_iter().map(StatusCheckResponse::from).collect()))
}
