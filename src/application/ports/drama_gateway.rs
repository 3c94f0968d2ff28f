//! Drama Gateway Port - 上游剧集 API
//!
//! 每个操作对应一次上游调用，返回原始 JSON，
//! 由 domain::drama::envelope 负责解包

use async_trait::async_trait;
use serde_json::Value;

use super::UpstreamError;
use crate::domain::drama::{BookId, Episode, HeaderSet, Keyword, PageNo};

/// Drama Gateway Port
#[async_trait]
pub trait DramaGatewayPort: Send + Sync {
    /// 最新剧集列表
    async fn list_latest(&self, headers: &HeaderSet, page: PageNo) -> Result<Value, UpstreamError>;

    /// 关键词搜索联想
    async fn search(&self, headers: &HeaderSet, keyword: &Keyword) -> Result<Value, UpstreamError>;

    /// 批量加载章节（取播放地址）
    async fn load_chapters(
        &self,
        headers: &HeaderSet,
        book_id: &BookId,
        episode: Episode,
    ) -> Result<Value, UpstreamError>;
}
