//! Drama Context - Value Objects

use serde::{Deserialize, Serialize};

use super::DramaError;

/// 列表页码（从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PageNo(u32);

impl PageNo {
    pub fn new(page: i64) -> Result<Self, DramaError> {
        if page < 1 || page > i64::from(u32::MAX) {
            return Err(DramaError::InvalidPage(page));
        }
        Ok(Self(page as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for PageNo {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<i64> for PageNo {
    type Error = DramaError;

    fn try_from(page: i64) -> Result<Self, Self::Error> {
        Self::new(page)
    }
}

impl From<PageNo> for u32 {
    fn from(page: PageNo) -> Self {
        page.0
    }
}

impl std::fmt::Display for PageNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 上游剧集 ID（bookId），原样透传
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 集数，对应上游的播放位置 index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Episode(i64);

impl Episode {
    pub fn new(index: i64) -> Self {
        Self(index)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Default for Episode {
    fn default() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 搜索关键词
///
/// 空字符串是合法输入，由上游返回空结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self(keyword.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_no_rejects_zero_and_negative() {
        assert!(PageNo::new(0).is_err());
        assert!(PageNo::new(-3).is_err());
        assert_eq!(PageNo::new(1).unwrap().value(), 1);
    }

    #[test]
    fn test_page_no_rejects_overflow() {
        assert!(PageNo::new(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_page_no_deserialize() {
        let page: PageNo = serde_json::from_str("7").unwrap();
        assert_eq!(page.value(), 7);
        assert!(serde_json::from_str::<PageNo>("0").is_err());
    }

    #[test]
    fn test_episode_default_is_first() {
        assert_eq!(Episode::default().value(), 1);
    }
}
