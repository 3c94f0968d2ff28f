//! Data Transfer Objects
//!
//! 前端依赖的响应结构，字段名保持 snake_case，上游数据原样透传

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::{LatestDramas, SearchResults, StreamLinkResult};
use crate::domain::status::StatusCheck;

// ============================================================================
// Messages
// ============================================================================

pub const NO_DATA_FOUND: &str = "No data found";
pub const NO_RESULTS_FOUND: &str = "No results found";
pub const STREAM_LINK_NOT_FOUND: &str = "Stream link not found";
pub const API_ROOT_MESSAGE: &str = "DramaBox Streaming API";

// ============================================================================
// Drama DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LatestDramasQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct StreamRequest {
    #[serde(deserialize_with = "string_or_number")]
    pub book_id: String,
    #[serde(default = "default_episode")]
    pub episode: i64,
}

fn default_episode() -> i64 {
    1
}

/// 上游列表里的 bookId 有时是字符串有时是数字，前端原样回传
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

/// 列表类响应（最新剧集、搜索）
///
/// 成功: `{success: true, data, page|keyword}`
/// 无数据: `{success: false, data: [], message}`
#[derive(Debug, Serialize)]
pub struct DramaListResponse {
    pub success: bool,
    pub data: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl DramaListResponse {
    pub fn not_found(message: &'static str) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            page: None,
            keyword: None,
            message: Some(message),
        }
    }
}

impl From<LatestDramas> for DramaListResponse {
    fn from(latest: LatestDramas) -> Self {
        Self {
            success: true,
            data: latest.records,
            page: Some(latest.page.value()),
            keyword: None,
            message: None,
        }
    }
}

impl From<SearchResults> for DramaListResponse {
    fn from(results: SearchResults) -> Self {
        Self {
            success: true,
            data: results.suggestions,
            page: None,
            keyword: Some(results.keyword.into_inner()),
            message: None,
        }
    }
}

/// 播放地址响应
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StreamResponse {
    Found {
        success: bool,
        stream_url: Value,
        episode: i64,
        book_id: String,
        chapter_info: Value,
    },
    NotFound {
        success: bool,
        message: &'static str,
    },
}

impl StreamResponse {
    pub fn not_found() -> Self {
        StreamResponse::NotFound {
            success: false,
            message: STREAM_LINK_NOT_FOUND,
        }
    }
}

impl From<StreamLinkResult> for StreamResponse {
    fn from(link: StreamLinkResult) -> Self {
        StreamResponse::Found {
            success: true,
            stream_url: link.stream_url,
            episode: link.episode.value(),
            book_id: link.book_id.to_string(),
            chapter_info: link.chapter,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

// ============================================================================
// Status DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}

#[derive(Debug, Serialize)]
pub struct StatusCheckResponse {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl From<StatusCheck> for StatusCheckResponse {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id().to_string(),
            client_name: check.client_name().to_string(),
            timestamp: check.timestamp().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drama::{Keyword, PageNo};
    use serde_json::json;

    #[test]
    fn test_latest_response_shape() {
        let response = DramaListResponse::from(LatestDramas {
            records: vec![json!({"bookId": "1", "bookName": "X"})],
            page: PageNo::new(1).unwrap(),
        });
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"success": true, "data": [{"bookId": "1", "bookName": "X"}], "page": 1})
        );
    }

    #[test]
    fn test_search_response_shape() {
        let response = DramaListResponse::from(SearchResults {
            suggestions: vec![json!({"bookId": "2"})],
            keyword: Keyword::new("cinta"),
        });
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"success": true, "data": [{"bookId": "2"}], "keyword": "cinta"})
        );
    }

    #[test]
    fn test_not_found_shapes() {
        assert_eq!(
            serde_json::to_value(DramaListResponse::not_found(NO_DATA_FOUND)).unwrap(),
            json!({"success": false, "data": [], "message": "No data found"})
        );
        assert_eq!(
            serde_json::to_value(StreamResponse::not_found()).unwrap(),
            json!({"success": false, "message": "Stream link not found"})
        );
    }

    #[test]
    fn test_stream_request_accepts_numeric_book_id() {
        let request: StreamRequest = serde_json::from_str(r#"{"book_id": 41000102902}"#).unwrap();
        assert_eq!(request.book_id, "41000102902");
        assert_eq!(request.episode, 1);

        let request: StreamRequest =
            serde_json::from_str(r#"{"book_id": "abc", "episode": 4}"#).unwrap();
        assert_eq!(request.book_id, "abc");
        assert_eq!(request.episode, 4);
    }
}
