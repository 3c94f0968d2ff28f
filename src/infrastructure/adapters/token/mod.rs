//! Token Adapter - 上游凭证服务客户端

mod http_token_client;

pub use http_token_client::*;
