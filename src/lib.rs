//! DramaBox Proxy - 短剧 API 代理服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Drama Context: 设备身份、请求头、上游响应解析
//! - Status Context: 状态检查记录
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TokenProvider, DramaGateway, Repositories）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 前端静态文件
//! - Persistence: SQLite 存储
//! - Adapters: Token Client, DramaBox Client

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{load_config, AppConfig};
