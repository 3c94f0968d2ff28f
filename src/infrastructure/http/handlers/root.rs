//! Root Handler

use axum::Json;

use crate::infrastructure::http::dto::{RootResponse, API_ROOT_MESSAGE};

/// API 根路径
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: API_ROOT_MESSAGE,
    })
}
