//! HTTP Error Handling
//!
//! 错误响应格式 `{"detail": "..."}`，
//! 上游错误的具体原因只写日志，不返回给调用方

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求参数不合法（422）
    Validation(String),
    /// 内部错误（500），`detail` 为每条路由固定的提示，`cause` 仅记录日志
    Internal { detail: &'static str, cause: String },
}

impl ApiError {
    /// 把应用层错误转换为 API 错误
    ///
    /// 除验证错误外，一律以 `detail` 作为固定提示返回 500
    pub fn from_application(err: ApplicationError, detail: &'static str) -> Self {
        match err {
            ApplicationError::ValidationError(msg) => ApiError::Validation(msg),
            other => ApiError::Internal {
                detail,
                cause: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::Validation(msg) => {
                tracing::warn!(error = %msg, "Request validation failed");
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::new(msg))
            }
            ApiError::Internal { detail, cause } => {
                tracing::error!(cause = %cause, "{}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(detail))
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let err = ApiError::from_application(
            ApplicationError::UpstreamUnavailable("connection refused at 10.0.0.3".to_string()),
            "Failed to fetch latest dramas",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"detail": "Failed to fetch latest dramas"})
        );
    }

    #[tokio::test]
    async fn test_validation_error_is_422() {
        let err = ApiError::from_application(
            ApplicationError::validation("client_name must not be empty"),
            "Failed to create status check",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await["detail"],
            "client_name must not be empty"
        );
    }
}
