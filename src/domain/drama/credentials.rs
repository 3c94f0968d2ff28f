//! Drama Context - 上游凭证与请求头
//!
//! 上游 API 只接受"已知移动客户端"的请求：
//! 每次调用都需要 token 服务下发的 bearer token 和 device id，
//! 再加上一组固定的客户端身份头（版本号、包名、语言、时区等）。

use serde::Deserialize;

/// Token 服务下发的凭证
///
/// 生命周期 = 一次代理请求，不缓存
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenRecord {
    pub token: String,
    #[serde(rename = "deviceid")]
    pub device_id: String,
}

impl TokenRecord {
    pub fn new(token: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            device_id: device_id.into(),
        }
    }
}

/// 模拟的移动客户端身份
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceProfile {
    pub user_agent: String,
    pub version: String,
    pub vn: String,
    pub cid: String,
    pub package_name: String,
    pub apn: String,
    pub language: String,
    pub p: String,
    pub time_zone: String,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            user_agent: "okhttp/4.10.0".to_string(),
            version: "430".to_string(),
            vn: "4.3.0".to_string(),
            cid: "DRA1000042".to_string(),
            package_name: "com.storymatrix.drama".to_string(),
            apn: "1".to_string(),
            language: "in".to_string(),
            p: "43".to_string(),
            time_zone: "+0800".to_string(),
        }
    }
}

impl DeviceProfile {
    /// 组装上游请求头
    ///
    /// 纯函数：相同的 profile 和 token 总是得到完全相同的 HeaderSet
    pub fn build_headers(&self, token: &TokenRecord) -> HeaderSet {
        HeaderSet(vec![
            ("User-Agent", self.user_agent.clone()),
            ("Accept-Encoding", "gzip".to_string()),
            ("Content-Type", "application/json; charset=UTF-8".to_string()),
            ("tn", format!("Bearer {}", token.token)),
            ("version", self.version.clone()),
            ("vn", self.vn.clone()),
            ("cid", self.cid.clone()),
            ("package-name", self.package_name.clone()),
            ("apn", self.apn.clone()),
            ("device-id", token.device_id.clone()),
            ("language", self.language.clone()),
            ("current-language", self.language.clone()),
            ("p", self.p.clone()),
            ("time-zone", self.time_zone.clone()),
        ])
    }
}

/// 使用默认客户端身份组装请求头
pub fn build_headers(token: &TokenRecord) -> HeaderSet {
    DeviceProfile::default().build_headers(token)
}

/// 有序的请求头集合
///
/// 与传输层无关；转换为 `HeaderMap` 时才校验头部取值是否合法
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSet(Vec<(&'static str, String)>);

impl HeaderSet {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
