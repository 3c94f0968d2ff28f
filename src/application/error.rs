//! 应用层错误定义
//!
//! 统一的命令/查询错误类型。
//! 注意：上游"没有数据"不是错误，而是 `Lookup::Missing`

use thiserror::Error;

use crate::application::ports::{RepositoryError, UpstreamError};
use crate::domain::drama::DramaError;
use crate::domain::status::StatusError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 上游不可用（token 服务或剧集 API）
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<UpstreamError> for ApplicationError {
    fn from(err: UpstreamError) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<DramaError> for ApplicationError {
    fn from(err: DramaError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<StatusError> for ApplicationError {
    fn from(err: StatusError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
