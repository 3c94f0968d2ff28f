//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::drama::DeviceProfile;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 跨域配置
    #[serde(default)]
    pub cors: CorsConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Token 服务配置
    #[serde(default)]
    pub token: TokenConfig,

    /// 上游剧集 API 配置
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// 模拟的客户端身份
    #[serde(default)]
    pub client: DeviceProfile,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置（前端构建产物）
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default)]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("frontend/build")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 跨域配置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// 逗号分隔的来源列表，"*" 表示任意来源
    #[serde(default = "default_cors_origins")]
    pub origins: String,
}

fn default_cors_origins() -> String {
    "*".to_string()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_cors_origins(),
        }
    }
}

impl CorsConfig {
    /// 拆分为来源列表，忽略空白项
    pub fn origin_list(&self) -> Vec<String> {
        self.origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 完整连接字符串，设置后忽略 dir 和 name
    #[serde(default)]
    pub url: Option<String>,

    /// 数据库文件所在目录
    #[serde(default = "default_db_dir")]
    pub dir: PathBuf,

    /// 数据库名称（文件名，不含扩展名）
    #[serde(default = "default_db_name")]
    pub name: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_db_name() -> String {
    "dramabox".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            dir: default_db_dir(),
            name: default_db_name(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// 获取数据库 URL
    pub fn database_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("sqlite:{}?mode=rwc", self.file_path().display()),
        }
    }

    /// 数据库文件路径
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(format!("{}.db", self.name))
    }
}

/// Token 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// token 服务 URL
    #[serde(default = "default_token_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_token_timeout")]
    pub timeout_secs: u64,
}

fn default_token_url() -> String {
    "https://dramabox-token.vercel.app/token".to_string()
}

fn default_token_timeout() -> u64 {
    10
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            url: default_token_url(),
            timeout_secs: default_token_timeout(),
        }
    }
}

/// 上游剧集 API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// 基础 URL
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_upstream_timeout")]
    pub timeout_secs: u64,
}

fn default_upstream_url() -> String {
    "https://sapi.dramaboxdb.com/drama-box".to_string()
}

fn default_upstream_timeout() -> u64 {
    30
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            timeout_secs: default_upstream_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
