//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod dramabox;
pub mod token;

pub use dramabox::*;
pub use token::*;

use crate::application::ports::UpstreamError;

/// reqwest 错误归类为上游错误
pub(crate) fn upstream_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else if e.is_connect() {
        UpstreamError::NetworkError(format!("Cannot connect to upstream: {}", e))
    } else if e.is_decode() {
        UpstreamError::InvalidResponse(e.to_string())
    } else {
        UpstreamError::NetworkError(e.to_string())
    }
}
