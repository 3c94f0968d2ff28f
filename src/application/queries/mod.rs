//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：剧集代理的三个只读操作，以及状态记录列表

mod drama_queries;
mod status_queries;

pub mod handlers;

pub use drama_queries::*;
pub use status_queries::*;
