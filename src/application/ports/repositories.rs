//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::status::StatusCheck;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 列表查询的最大返回条数
pub const STATUS_CHECK_LIST_LIMIT: u32 = 1000;

/// StatusCheck Repository Port
#[async_trait]
pub trait StatusCheckRepositoryPort: Send + Sync {
    /// 保存记录
    async fn save(&self, check: &StatusCheck) -> Result<(), RepositoryError>;

    /// 按存储顺序返回最多 `limit` 条记录
    async fn find_all(&self, limit: u32) -> Result<Vec<StatusCheck>, RepositoryError>;
}
