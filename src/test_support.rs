//! 测试替身：固定返回的 token 服务和上游网关

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt;

use crate::application::ports::{
    DramaGatewayPort, StatusCheckRepositoryPort, TokenProviderPort, UpstreamError,
};
use crate::domain::drama::{BookId, DeviceProfile, Episode, HeaderSet, Keyword, PageNo, TokenRecord};
use crate::infrastructure::http::{AppState, HttpServer, ServerConfig};
use crate::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteStatusCheckRepository,
};

/// 每次调用返回一个新 token 的 Token Provider
pub struct FakeTokenProvider {
    calls: AtomicUsize,
    fail: bool,
}

impl FakeTokenProvider {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProviderPort for FakeTokenProvider {
    async fn fetch_token(&self) -> Result<TokenRecord, UpstreamError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(UpstreamError::NetworkError(
                "Cannot connect to token service: connection refused".to_string(),
            ));
        }
        Ok(TokenRecord::new(format!("token-{}", n), "device-1"))
    }
}

/// 网关收到的调用
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    Latest { page: u32, headers: HeaderSet },
    Search { keyword: String, headers: HeaderSet },
    Chapters { book_id: String, episode: i64, headers: HeaderSet },
}

/// 固定返回同一个 JSON（或固定失败）的上游网关
pub struct StubGateway {
    body: Option<Value>,
    calls: Mutex<Vec<GatewayCall>>,
}

impl StubGateway {
    pub fn returning(body: Value) -> Self {
        Self {
            body: Some(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            body: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: GatewayCall) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push(call);
        self.body.clone().ok_or(UpstreamError::ServiceError {
            status: 502,
            body: "bad gateway".to_string(),
        })
    }
}

#[async_trait]
impl DramaGatewayPort for StubGateway {
    async fn list_latest(&self, headers: &HeaderSet, page: PageNo) -> Result<Value, UpstreamError> {
        self.respond(GatewayCall::Latest {
            page: page.value(),
            headers: headers.clone(),
        })
    }

    async fn search(&self, headers: &HeaderSet, keyword: &Keyword) -> Result<Value, UpstreamError> {
        self.respond(GatewayCall::Search {
            keyword: keyword.to_string(),
            headers: headers.clone(),
        })
    }

    async fn load_chapters(
        &self,
        headers: &HeaderSet,
        book_id: &BookId,
        episode: Episode,
    ) -> Result<Value, UpstreamError> {
        self.respond(GatewayCall::Chapters {
            book_id: book_id.to_string(),
            episode: episode.value(),
            headers: headers.clone(),
        })
    }
}

/// 内存 SQLite 上的状态记录仓储
pub async fn memory_status_repo() -> Arc<SqliteStatusCheckRepository> {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    Arc::new(SqliteStatusCheckRepository::new(pool))
}

/// 用替身组装 AppState
pub async fn test_state(
    token_provider: Arc<FakeTokenProvider>,
    gateway: Arc<StubGateway>,
) -> AppState {
    let status_repo: Arc<dyn StatusCheckRepositoryPort> = memory_status_repo().await;
    AppState::new(token_provider, gateway, status_repo, DeviceProfile::default())
}

/// 用替身组装完整的 Router（含中间件）
pub async fn test_router(token_provider: Arc<FakeTokenProvider>, gateway: Arc<StubGateway>) -> Router {
    let state = test_state(token_provider, gateway).await;
    HttpServer::new(ServerConfig::default(), state).router()
}

/// 发送请求并把响应体解析为 JSON（空响应体为 Null）
pub async fn request_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
