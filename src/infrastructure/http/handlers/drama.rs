//! Drama HTTP Handlers
//!
//! 上游无数据时返回 200 + `success: false`；
//! 上游不可用时返回 500 + 固定提示

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{GetLatestDramas, GetStreamLink, SearchDramas};
use crate::domain::drama::{BookId, Episode, Keyword, Lookup, PageNo};
use crate::infrastructure::http::dto::{
    DramaListResponse, LatestDramasQuery, SearchRequest, StreamRequest, StreamResponse,
    NO_DATA_FOUND, NO_RESULTS_FOUND,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const LATEST_FAILED: &str = "Failed to fetch latest dramas";
const SEARCH_FAILED: &str = "Failed to search dramas";
const STREAM_FAILED: &str = "Failed to get stream link";

/// 最新剧集列表
pub async fn latest_dramas(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LatestDramasQuery>, QueryRejection>,
) -> Result<Json<DramaListResponse>, ApiError> {
    let Query(query) = query?;
    let page = PageNo::new(query.page).map_err(|e| ApiError::Validation(e.to_string()))?;

    let result = state
        .latest_dramas_handler
        .handle(GetLatestDramas { page })
        .await
        .map_err(|e| ApiError::from_application(e, LATEST_FAILED))?;

    Ok(Json(match result {
        Lookup::Found(latest) => latest.into(),
        Lookup::Missing => DramaListResponse::not_found(NO_DATA_FOUND),
    }))
}

/// 关键词搜索
pub async fn search_dramas(
    State(state): State<Arc<AppState>>,
    request: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<DramaListResponse>, ApiError> {
    let Json(request) = request?;

    let result = state
        .search_dramas_handler
        .handle(SearchDramas {
            keyword: Keyword::new(request.keyword),
        })
        .await
        .map_err(|e| ApiError::from_application(e, SEARCH_FAILED))?;

    Ok(Json(match result {
        Lookup::Found(results) => results.into(),
        Lookup::Missing => DramaListResponse::not_found(NO_RESULTS_FOUND),
    }))
}

/// 获取某一集的播放地址
pub async fn stream_link(
    State(state): State<Arc<AppState>>,
    request: Result<Json<StreamRequest>, JsonRejection>,
) -> Result<Json<StreamResponse>, ApiError> {
    let Json(request) = request?;

    let result = state
        .stream_link_handler
        .handle(GetStreamLink {
            book_id: BookId::new(request.book_id),
            episode: Episode::new(request.episode),
        })
        .await
        .map_err(|e| ApiError::from_application(e, STREAM_FAILED))?;

    Ok(Json(match result {
        Lookup::Found(link) => link.into(),
        Lookup::Missing => StreamResponse::not_found(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{request_json, test_router, FakeTokenProvider, StubGateway};
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_latest_against_stub_upstream() {
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::returning(json!({
                "data": {"newTheaterList": {"records": [{"bookId": "1", "bookName": "X"}]}}
            }))),
        )
        .await;

        let (status, body) = request_json(app, "GET", "/api/dramas/latest?page=1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "data": [{"bookId": "1", "bookName": "X"}], "page": 1})
        );
    }

    #[tokio::test]
    async fn test_latest_defaults_to_first_page() {
        let gateway = Arc::new(StubGateway::returning(json!({"data": {"newTheaterList": {"records": []}}})));
        let app = test_router(Arc::new(FakeTokenProvider::new()), gateway.clone()).await;

        let (status, body) = request_json(app, "GET", "/api/dramas/latest", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "data": [], "page": 1}));
    }

    #[tokio::test]
    async fn test_latest_missing_data() {
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::returning(json!({"status": 0, "message": "ok"}))),
        )
        .await;

        let (status, body) = request_json(app, "GET", "/api/dramas/latest?page=3", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": false, "data": [], "message": "No data found"})
        );
    }

    #[tokio::test]
    async fn test_latest_rejects_page_zero() {
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::returning(json!({}))),
        )
        .await;

        let (status, body) = request_json(app, "GET", "/api/dramas/latest?page=0", None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_token_failure_is_500_without_detail_leak() {
        let app = test_router(
            Arc::new(FakeTokenProvider::failing()),
            Arc::new(StubGateway::returning(json!({}))),
        )
        .await;

        let (status, body) = request_json(app, "GET", "/api/dramas/latest", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Failed to fetch latest dramas"}));
    }

    #[tokio::test]
    async fn test_search_empty_keyword() {
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::returning(json!({"data": {"suggestList": []}}))),
        )
        .await;

        let (status, body) =
            request_json(app, "POST", "/api/dramas/search", Some(json!({"keyword": ""}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": false, "data": [], "message": "No results found"})
        );
    }

    #[tokio::test]
    async fn test_search_found() {
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::returning(
                json!({"data": {"suggestList": [{"bookId": "5", "bookName": "Cinta"}]}}),
            )),
        )
        .await;

        let (status, body) = request_json(
            app,
            "POST",
            "/api/dramas/search",
            Some(json!({"keyword": "cinta"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "data": [{"bookId": "5", "bookName": "Cinta"}], "keyword": "cinta"})
        );
    }

    #[tokio::test]
    async fn test_search_upstream_down() {
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::unavailable()),
        )
        .await;

        let (status, body) = request_json(
            app,
            "POST",
            "/api/dramas/search",
            Some(json!({"keyword": "cinta"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Failed to search dramas"}));
    }

    #[tokio::test]
    async fn test_search_missing_keyword_is_422() {
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::returning(json!({}))),
        )
        .await;

        let (status, _) =
            request_json(app, "POST", "/api/dramas/search", Some(json!({"q": "x"}))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_stream_found() {
        let chapter = json!({"chapterId": "c1", "chapterIndex": 0, "cdnList": ["https://cdn/1.m3u8"]});
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::returning(json!({"data": {"chapterList": [chapter.clone()]}}))),
        )
        .await;

        let (status, body) = request_json(
            app,
            "POST",
            "/api/dramas/stream",
            Some(json!({"book_id": "41000102902", "episode": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "stream_url": "https://cdn/1.m3u8",
                "episode": 2,
                "book_id": "41000102902",
                "chapter_info": chapter
            })
        );
    }

    #[tokio::test]
    async fn test_stream_empty_chapter_list() {
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::returning(json!({"data": {"chapterList": []}}))),
        )
        .await;

        let (status, body) = request_json(
            app,
            "POST",
            "/api/dramas/stream",
            Some(json!({"book_id": "nope"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": false, "message": "Stream link not found"})
        );
    }

    #[tokio::test]
    async fn test_stream_upstream_down() {
        let app = test_router(
            Arc::new(FakeTokenProvider::new()),
            Arc::new(StubGateway::unavailable()),
        )
        .await;

        let (status, body) = request_json(
            app,
            "POST",
            "/api/dramas/stream",
            Some(json!({"book_id": "1", "episode": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Failed to get stream link"}));
    }
}
