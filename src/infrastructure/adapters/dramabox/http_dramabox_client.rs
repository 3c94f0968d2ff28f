//! HTTP DramaBox Client - 调用上游剧集 API
//!
//! 实现 DramaGatewayPort trait
//!
//! 上游 API（base: https://sapi.dramaboxdb.com/drama-box）:
//! - POST /he001/theater          最新剧集
//! - POST /search/suggest         搜索联想
//! - POST /chapterv2/batch/load   章节与 CDN 地址

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::payloads::{ChapterLoadRequest, SuggestRequest, TheaterRequest};
use crate::application::ports::{DramaGatewayPort, UpstreamError};
use crate::domain::drama::{BookId, Episode, HeaderSet, Keyword, PageNo};
use crate::infrastructure::adapters::upstream_error;

const THEATER_PATH: &str = "/he001/theater";
const SEARCH_SUGGEST_PATH: &str = "/search/suggest";
const CHAPTER_LOAD_PATH: &str = "/chapterv2/batch/load";

/// HTTP DramaBox 客户端配置
#[derive(Debug, Clone)]
pub struct HttpDramaBoxClientConfig {
    /// 上游 API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpDramaBoxClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sapi.dramaboxdb.com/drama-box".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpDramaBoxClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HeaderSet 转为 reqwest 请求头
///
/// token 来自外部服务，可能含有 HTTP 头部不允许的字符
pub fn to_header_map(headers: &HeaderSet) -> Result<HeaderMap, UpstreamError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| UpstreamError::InvalidHeader(format!("{}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| UpstreamError::InvalidHeader(format!("{}: {}", name, e)))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// HTTP DramaBox 客户端
pub struct HttpDramaBoxClient {
    client: Client,
    config: HttpDramaBoxClientConfig,
}

impl HttpDramaBoxClient {
    /// 创建新的 HTTP DramaBox 客户端
    pub fn new(config: HttpDramaBoxClientConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// POST 一个 JSON 请求体，返回解析后的原始 JSON
    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        headers: &HeaderSet,
        body: &B,
    ) -> Result<Value, UpstreamError> {
        let url = self.url(path);
        let header_map = to_header_map(headers)?;

        tracing::debug!(url = %url, "Sending upstream request");

        let response = self
            .client
            .post(&url)
            .headers(header_map)
            .json(body)
            .send()
            .await
            .map_err(upstream_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(UpstreamError::ServiceError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("Upstream body is not JSON: {}", e)))
    }
}

#[async_trait]
impl DramaGatewayPort for HttpDramaBoxClient {
    async fn list_latest(&self, headers: &HeaderSet, page: PageNo) -> Result<Value, UpstreamError> {
        self.post(THEATER_PATH, headers, &TheaterRequest::new(page))
            .await
    }

    async fn search(&self, headers: &HeaderSet, keyword: &Keyword) -> Result<Value, UpstreamError> {
        self.post(SEARCH_SUGGEST_PATH, headers, &SuggestRequest::new(keyword))
            .await
    }

    async fn load_chapters(
        &self,
        headers: &HeaderSet,
        book_id: &BookId,
        episode: Episode,
    ) -> Result<Value, UpstreamError> {
        self.post(
            CHAPTER_LOAD_PATH,
            headers,
            &ChapterLoadRequest::new(book_id, episode),
        )
        .await
    }
}
