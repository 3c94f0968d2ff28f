//! 上游请求体
//!
//! 字段名和固定取值照搬官方 Android 客户端的抓包结果

use serde::Serialize;

use crate::domain::drama::{BookId, Episode, Keyword, PageNo};

/// POST /he001/theater
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TheaterRequest {
    new_channel_style: u8,
    is_need_rank: u8,
    page_no: u32,
    index: u32,
    channel_id: u32,
}

impl TheaterRequest {
    pub(super) fn new(page: PageNo) -> Self {
        Self {
            new_channel_style: 1,
            is_need_rank: 1,
            page_no: page.value(),
            index: 1,
            channel_id: 43,
        }
    }
}

/// POST /search/suggest
#[derive(Debug, Serialize)]
pub(super) struct SuggestRequest<'a> {
    keyword: &'a str,
}

impl<'a> SuggestRequest<'a> {
    pub(super) fn new(keyword: &'a Keyword) -> Self {
        Self {
            keyword: keyword.as_str(),
        }
    }
}

/// POST /chapterv2/batch/load
///
/// 除 index 和 bookId 外都是固定值：非预加载、无片尾推荐的普通播放
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ChapterLoadRequest<'a> {
    boundary_index: i32,
    coming_play_section_id: i32,
    index: i64,
    currency_play_source: &'static str,
    need_end_recommend: i32,
    currency_play_source_name: &'static str,
    pre_load: bool,
    rid: &'static str,
    pull_cid: &'static str,
    load_direction: i32,
    start_up_key: &'static str,
    book_id: &'a str,
}

impl<'a> ChapterLoadRequest<'a> {
    pub(super) fn new(book_id: &'a BookId, episode: Episode) -> Self {
        Self {
            boundary_index: 0,
            coming_play_section_id: -1,
            index: episode.value(),
            currency_play_source: "discover_new_rec_new",
            need_end_recommend: 0,
            currency_play_source_name: "",
            pre_load: false,
            rid: "",
            pull_cid: "",
            load_direction: 0,
            start_up_key: "",
            book_id: book_id.as_str(),
        }
    }
}
