//! Upstream Errors - 外部 HTTP 服务调用错误
//!
//! Token 服务和剧集 API 共用同一组错误：对调用方而言两者都是"上游不可用"

use thiserror::Error;

/// 上游调用错误
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: HTTP {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}
