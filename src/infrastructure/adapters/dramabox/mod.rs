//! DramaBox Adapter - 上游剧集 API 客户端

mod http_dramabox_client;
mod payloads;

pub use http_dramabox_client::*;
