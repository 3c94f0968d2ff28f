//! Status Queries

/// 列出状态检查记录
#[derive(Debug, Clone)]
pub struct ListStatusChecks;
