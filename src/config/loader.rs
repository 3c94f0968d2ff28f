//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "DRAMABOX";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `DRAMABOX_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `DRAMABOX_SERVER__PORT=8001`
/// - `DRAMABOX_DATABASE__URL=sqlite:/data/status.db?mode=rwc`
/// - `DRAMABOX_DATABASE__NAME=status`
/// - `DRAMABOX_CORS__ORIGINS=https://a.example,https://b.example`
/// - `DRAMABOX_TOKEN__URL=http://token-service/token`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8001)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "frontend/build")?
        .set_default("cors.origins", "*")?
        .set_default("database.dir", "data")?
        .set_default("database.name", "dramabox")?
        .set_default("database.max_connections", 5)?
        .set_default("token.url", "https://dramabox-token.vercel.app/token")?
        .set_default("token.timeout_secs", 10)?
        .set_default("upstream.base_url", "https://sapi.dramaboxdb.com/drama-box")?
        .set_default("upstream.timeout_secs", 30)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 注意: cors.origins 保持字符串，由 CorsConfig::origin_list 拆分
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.token.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Token URL cannot be empty".to_string(),
        ));
    }

    if config.upstream.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Upstream base URL cannot be empty".to_string(),
        ));
    }

    if config.token.timeout_secs == 0 || config.upstream.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Upstream timeouts must be greater than 0".to_string(),
        ));
    }

    if config.database.url.is_none() && config.database.name.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database name cannot be empty".to_string(),
        ));
    }

    if config.cors.origin_list().is_empty() {
        return Err(ConfigError::ValidationError(
            "At least one CORS origin is required".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    if config.server.static_files.enabled {
        tracing::info!("Static Files: {:?}", config.server.static_files.dir);
    }
    tracing::info!("CORS Origins: {:?}", config.cors.origin_list());
    tracing::info!("Database: {}", config.database.database_url());
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Token URL: {}", config.token.url);
    tracing::info!("Token Timeout: {}s", config.token.timeout_secs);
    tracing::info!("Upstream: {}", config.upstream.base_url);
    tracing::info!("Upstream Timeout: {}s", config.upstream.timeout_secs);
    tracing::info!(
        "Client Profile: {} ({} v{})",
        config.client.package_name,
        config.client.cid,
        config.client.vn
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
