//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Drama Context: 上游剧集 API 的凭证、参数与响应解包
//! - Status Context: 状态检查记录

pub mod drama;
pub mod status;
