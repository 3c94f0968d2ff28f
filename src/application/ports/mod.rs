//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod drama_gateway;
mod repositories;
mod token_provider;
mod upstream;

pub use drama_gateway::DramaGatewayPort;
pub use repositories::{RepositoryError, StatusCheckRepositoryPort, STATUS_CHECK_LIST_LIMIT};
pub use token_provider::TokenProviderPort;
pub use upstream::UpstreamError;
