//! Status Commands

/// 创建状态检查记录命令
#[derive(Debug, Clone)]
pub struct CreateStatusCheck {
    pub client_name: String,
}
