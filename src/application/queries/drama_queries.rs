//! Drama Queries

use crate::domain::drama::{BookId, Episode, Keyword, PageNo};

/// 最新剧集列表查询
#[derive(Debug, Clone)]
pub struct GetLatestDramas {
    pub page: PageNo,
}

/// 剧集搜索查询
#[derive(Debug, Clone)]
pub struct SearchDramas {
    pub keyword: Keyword,
}

/// 播放地址查询
#[derive(Debug, Clone)]
pub struct GetStreamLink {
    pub book_id: BookId,
    pub episode: Episode,
}
