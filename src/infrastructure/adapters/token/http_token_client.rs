//! HTTP Token Client - 调用外部 token 服务
//!
//! 实现 TokenProviderPort trait
//!
//! 外部 token API:
//! GET https://dramabox-token.vercel.app/token
//! Response: {"token": "...", "deviceid": "..."}

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{TokenProviderPort, UpstreamError};
use crate::domain::drama::TokenRecord;
use crate::infrastructure::adapters::upstream_error;

/// HTTP Token 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTokenClientConfig {
    /// token 服务完整 URL
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTokenClientConfig {
    fn default() -> Self {
        Self {
            url: "https://dramabox-token.vercel.app/token".to_string(),
            timeout_secs: 10,
        }
    }
}

impl HttpTokenClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Token 客户端
pub struct HttpTokenClient {
    client: Client,
    config: HttpTokenClientConfig,
}

impl HttpTokenClient {
    /// 创建新的 HTTP Token 客户端
    pub fn new(config: HttpTokenClientConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl TokenProviderPort for HttpTokenClient {
    async fn fetch_token(&self) -> Result<TokenRecord, UpstreamError> {
        tracing::debug!(url = %self.config.url, "Fetching upstream token");

        let response = self
            .client
            .get(&self.config.url)
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

        let token = response
            .json::<TokenRecord>()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("Malformed token response: {}", e)))?;

        tracing::debug!(device_id = %token.device_id, "Upstream token acquired");

        Ok(token)
    }
}
