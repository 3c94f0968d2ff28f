//! Token Provider Port - 上游凭证获取
//!
//! 具体实现在 infrastructure/adapters/token

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::drama::TokenRecord;

/// Token Provider Port
///
/// 每次调用都是一次新的往返，不缓存
#[async_trait]
pub trait TokenProviderPort: Send + Sync {
    /// 获取新的 token 和 device id
    async fn fetch_token(&self) -> Result<TokenRecord, UpstreamError>;
}
