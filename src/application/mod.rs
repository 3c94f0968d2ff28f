//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TokenProvider、DramaGateway、Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{handlers::CreateStatusCheckHandler, CreateStatusCheck};

pub use error::ApplicationError;

pub use ports::{
    DramaGatewayPort, RepositoryError, StatusCheckRepositoryPort, TokenProviderPort,
    UpstreamError,
};

pub use queries::{
    // Drama queries
    GetLatestDramas,
    GetStreamLink,
    SearchDramas,
    // Status queries
    ListStatusChecks,
    // Handlers
    handlers::{
        GetLatestDramasHandler, GetStreamLinkHandler, LatestDramas, ListStatusChecksHandler,
        SearchDramasHandler, SearchResults, StreamLinkResult, UpstreamCredentials,
    },
};
