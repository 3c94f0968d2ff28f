//! Drama Query Handlers
//!
//! 每个 handler 都是同一条流水线：
//! 获取 token → 组装请求头 → 调用上游 → 解包响应

use std::sync::Arc;

use serde_json::Value;

use crate::application::error::ApplicationError;
use crate::application::ports::{DramaGatewayPort, TokenProviderPort};
use crate::application::queries::{GetLatestDramas, GetStreamLink, SearchDramas};
use crate::domain::drama::{
    extract_latest, extract_stream, extract_suggestions, BookId, DeviceProfile, Episode,
    HeaderSet, Keyword, Lookup, PageNo,
};

// ============================================================================
// Response DTOs
// ============================================================================

/// 最新剧集列表
#[derive(Debug, Clone, PartialEq)]
pub struct LatestDramas {
    pub records: Vec<Value>,
    pub page: PageNo,
}

/// 搜索结果
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub suggestions: Vec<Value>,
    pub keyword: Keyword,
}

/// 播放地址
#[derive(Debug, Clone, PartialEq)]
pub struct StreamLinkResult {
    pub stream_url: Value,
    pub episode: Episode,
    pub book_id: BookId,
    pub chapter: Value,
}

// ============================================================================
// Upstream credentials
// ============================================================================

/// 为一次上游调用准备凭证
///
/// 每次都向 token 服务重新获取，不缓存
#[derive(Clone)]
pub struct UpstreamCredentials {
    token_provider: Arc<dyn TokenProviderPort>,
    profile: DeviceProfile,
}

impl UpstreamCredentials {
    pub fn new(token_provider: Arc<dyn TokenProviderPort>, profile: DeviceProfile) -> Self {
        Self {
            token_provider,
            profile,
        }
    }

    pub async fn headers(&self) -> Result<HeaderSet, ApplicationError> {
        let token = self.token_provider.fetch_token().await?;
        Ok(self.profile.build_headers(&token))
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetLatestDramas Handler
pub struct GetLatestDramasHandler {
    credentials: UpstreamCredentials,
    gateway: Arc<dyn DramaGatewayPort>,
}

impl GetLatestDramasHandler {
    pub fn new(credentials: UpstreamCredentials, gateway: Arc<dyn DramaGatewayPort>) -> Self {
        Self {
            credentials,
            gateway,
        }
    }

    pub async fn handle(
        &self,
        query: GetLatestDramas,
    ) -> Result<Lookup<LatestDramas>, ApplicationError> {
        let headers = self.credentials.headers().await?;
        let raw = self.gateway.list_latest(&headers, query.page).await?;

        let result = extract_latest(raw).map(|records| LatestDramas {
            records,
            page: query.page,
        });

        if let Lookup::Found(latest) = &result {
            tracing::debug!(page = %query.page, count = latest.records.len(), "Latest dramas fetched");
        } else {
            tracing::debug!(page = %query.page, "No latest dramas in upstream response");
        }

        Ok(result)
    }
}

/// SearchDramas Handler
pub struct SearchDramasHandler {
    credentials: UpstreamCredentials,
    gateway: Arc<dyn DramaGatewayPort>,
}

impl SearchDramasHandler {
    pub fn new(credentials: UpstreamCredentials, gateway: Arc<dyn DramaGatewayPort>) -> Self {
        Self {
            credentials,
            gateway,
        }
    }

    pub async fn handle(&self, query: SearchDramas) -> Result<Lookup<SearchResults>, ApplicationError> {
        let headers = self.credentials.headers().await?;
        let raw = self.gateway.search(&headers, &query.keyword).await?;

        Ok(extract_suggestions(raw).map(|suggestions| SearchResults {
            suggestions,
            keyword: query.keyword,
        }))
    }
}

/// GetStreamLink Handler
pub struct GetStreamLinkHandler {
    credentials: UpstreamCredentials,
    gateway: Arc<dyn DramaGatewayPort>,
}

impl GetStreamLinkHandler {
    pub fn new(credentials: UpstreamCredentials, gateway: Arc<dyn DramaGatewayPort>) -> Self {
        Self {
            credentials,
            gateway,
        }
    }

    pub async fn handle(
        &self,
        query: GetStreamLink,
    ) -> Result<Lookup<StreamLinkResult>, ApplicationError> {
        let headers = self.credentials.headers().await?;
        let raw = self
            .gateway
            .load_chapters(&headers, &query.book_id, query.episode)
            .await?;

        let result = extract_stream(raw).map(|link| StreamLinkResult {
            stream_url: link.stream_url,
            episode: query.episode,
            book_id: query.book_id.clone(),
            chapter: link.chapter,
        });

        if !result.is_found() {
            tracing::info!(
                book_id = %query.book_id,
                episode = %query.episode,
                "Stream link not found in upstream response"
            );
        }

        Ok(result)
    }
}
