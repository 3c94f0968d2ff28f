//! Drama Context - 上游响应解包
//!
//! 上游 API 没有文档，响应结构随时可能缺字段或类型不符。
//! 这里把原始 JSON 解码成"全部字段可选"的局部结构：
//! 字段缺失、为 null 或类型不对，一律视为不存在（`None`），
//! 每条路由只有一个兜底分支，即 `Lookup::Missing`。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 解包结果
///
/// `Missing` 是正常业务结果（上游无数据），不是错误
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::Missing => Lookup::Missing,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::Missing,
        }
    }
}

/// 类型不符时返回 None 而不是让整个解码失败
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Deserialize)]
#[serde(bound = "D: DeserializeOwned")]
struct Envelope<D> {
    #[serde(default, deserialize_with = "lenient")]
    data: Option<D>,
}

impl<D: DeserializeOwned> Envelope<D> {
    /// 顶层不是对象时同样视为无数据
    fn decode(raw: Value) -> Option<D> {
        serde_json::from_value::<Envelope<D>>(raw)
            .ok()
            .and_then(|envelope| envelope.data)
    }
}

#[derive(Debug, Deserialize)]
struct TheaterData {
    #[serde(rename = "newTheaterList", default, deserialize_with = "lenient")]
    new_theater_list: Option<TheaterList>,
}

#[derive(Debug, Deserialize)]
struct TheaterList {
    #[serde(default, deserialize_with = "lenient")]
    records: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct SuggestData {
    #[serde(rename = "suggestList", default, deserialize_with = "lenient")]
    suggest_list: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ChapterData {
    #[serde(rename = "chapterList", default, deserialize_with = "lenient")]
    chapter_list: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct Chapter {
    #[serde(rename = "cdnList", default, deserialize_with = "lenient")]
    cdn_list: Option<Vec<Value>>,
}

/// 可播放的章节
#[derive(Debug, Clone, PartialEq)]
pub struct StreamLink {
    /// `cdnList` 的第一个元素，原样透传
    pub stream_url: Value,
    /// 完整的章节对象
    pub chapter: Value,
}

/// 最新剧集列表：`data.newTheaterList.records`
///
/// records 为空数组时仍算找到
pub fn extract_latest(raw: Value) -> Lookup<Vec<Value>> {
    Envelope::<TheaterData>::decode(raw)
        .and_then(|data| data.new_theater_list)
        .and_then(|list| list.records)
        .into()
}

/// 搜索联想：`data.suggestList`，必须非空
pub fn extract_suggestions(raw: Value) -> Lookup<Vec<Value>> {
    Envelope::<SuggestData>::decode(raw)
        .and_then(|data| data.suggest_list)
        .filter(|list| !list.is_empty())
        .into()
}

/// 播放地址：`data.chapterList[0].cdnList[0]`
///
/// 外层章节列表和内层 CDN 列表都必须非空
pub fn extract_stream(raw: Value) -> Lookup<StreamLink> {
    let chapter = Envelope::<ChapterData>::decode(raw)
        .and_then(|data| data.chapter_list)
        .and_then(|chapters| chapters.into_iter().next());

    let Some(chapter) = chapter else {
        return Lookup::Missing;
    };

    let stream_url = Chapter::deserialize(&chapter)
        .ok()
        .and_then(|parsed| parsed.cdn_list)
        .and_then(|cdns| cdns.into_iter().next());

    match stream_url {
        Some(stream_url) => Lookup::Found(StreamLink {
            stream_url,
            chapter,
        }),
        None => Lookup::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_latest_found() {
        let raw = json!({"data": {"newTheaterList": {"records": [{"bookId": "1", "bookName": "X"}]}}});
        assert_eq!(
            extract_latest(raw),
            Lookup::Found(vec![json!({"bookId": "1", "bookName": "X"})])
        );
    }

    #[test]
    fn test_latest_empty_records_still_found() {
        let raw = json!({"data": {"newTheaterList": {"records": []}}});
        assert_eq!(extract_latest(raw), Lookup::Found(vec![]));
    }

    #[test]
    fn test_latest_missing_paths() {
        assert_eq!(extract_latest(json!({})), Lookup::Missing);
        assert_eq!(extract_latest(json!({"data": null})), Lookup::Missing);
        assert_eq!(extract_latest(json!({"data": {}})), Lookup::Missing);
        assert_eq!(
            extract_latest(json!({"data": {"newTheaterList": {}}})),
            Lookup::Missing
        );
        assert_eq!(
            extract_latest(json!({"data": {"newTheaterList": {"records": "oops"}}})),
            Lookup::Missing
        );
    }

    #[test]
    fn test_non_object_body_is_missing() {
        assert_eq!(extract_latest(json!([1, 2, 3])), Lookup::Missing);
        assert_eq!(extract_suggestions(json!("error")), Lookup::Missing);
        assert_eq!(extract_stream(Value::Null), Lookup::Missing);
    }

    #[test]
    fn test_wrong_typed_data_is_missing() {
        let raw = json!({"status": 1, "data": "unauthorized"});
        assert_eq!(extract_latest(raw), Lookup::Missing);
    }

    #[test]
    fn test_suggestions_found() {
        let raw = json!({"data": {"suggestList": [{"bookId": "9"}]}});
        assert_eq!(
            extract_suggestions(raw),
            Lookup::Found(vec![json!({"bookId": "9"})])
        );
    }

    #[test]
    fn test_suggestions_empty_is_missing() {
        let raw = json!({"data": {"suggestList": []}});
        assert_eq!(extract_suggestions(raw), Lookup::Missing);
    }

    #[test]
    fn test_stream_found() {
        let chapter = json!({"chapterId": "c1", "cdnList": ["https://cdn/a.m3u8", "https://cdn/b.m3u8"]});
        let raw = json!({"data": {"chapterList": [chapter.clone(), {"chapterId": "c2"}]}});
        assert_eq!(
            extract_stream(raw),
            Lookup::Found(StreamLink {
                stream_url: json!("https://cdn/a.m3u8"),
                chapter,
            })
        );
    }

    #[test]
    fn test_stream_empty_chapter_list() {
        let raw = json!({"data": {"chapterList": []}});
        assert_eq!(extract_stream(raw), Lookup::Missing);
    }

    #[test]
    fn test_stream_empty_cdn_list() {
        let raw = json!({"data": {"chapterList": [{"chapterId": "c1", "cdnList": []}]}});
        assert_eq!(extract_stream(raw), Lookup::Missing);
    }

    #[test]
    fn test_stream_missing_cdn_list() {
        let raw = json!({"data": {"chapterList": [{"chapterId": "c1"}]}});
        assert_eq!(extract_stream(raw), Lookup::Missing);
    }

    #[test]
    fn test_stream_only_first_chapter_is_considered() {
        let raw = json!({"data": {"chapterList": [
            {"chapterId": "c1", "cdnList": []},
            {"chapterId": "c2", "cdnList": ["https://cdn/x"]}
        ]}});
        assert_eq!(extract_stream(raw), Lookup::Missing);
    }

    #[test]
    fn test_lookup_map() {
        assert_eq!(Lookup::Found(2).map(|v| v * 2), Lookup::Found(4));
        assert_eq!(Lookup::<i32>::Missing.map(|v| v * 2), Lookup::Missing);
    }
}
