//! HTTP Routes
//!
//! API Endpoints:
//! - /api/                   GET   服务名称
//! - /api/dramas/latest      GET   最新剧集（?page=N）
//! - /api/dramas/search      POST  关键词搜索
//! - /api/dramas/stream      POST  获取播放地址
//! - /api/status             POST  创建状态检查记录
//! - /api/status             GET   列出状态检查记录

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/", get(handlers::root))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .nest("/dramas", drama_routes())
        .route(
            "/status",
            post(handlers::create_status_check).get(handlers::list_status_checks),
        )
}

/// Drama 路由
fn drama_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/latest", get(handlers::latest_dramas))
        .route("/search", post(handlers::search_dramas))
        .route("/stream", post(handlers::stream_link))
}
