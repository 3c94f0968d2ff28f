//! Status Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ClientName, StatusCheckId};

/// 状态检查记录
///
/// 创建后不可修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    id: StatusCheckId,
    client_name: ClientName,
    timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// 创建新记录，生成新的 ID 和当前时间戳
    pub fn new(client_name: ClientName) -> Self {
        Self {
            id: StatusCheckId::new(),
            client_name,
            timestamp: Utc::now(),
        }
    }

    /// 从持久化数据重建
    pub fn restore(id: StatusCheckId, client_name: ClientName, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            client_name,
            timestamp,
        }
    }

    // Getters
    pub fn id(&self) -> &StatusCheckId {
        &self.id
    }

    pub fn client_name(&self) -> &ClientName {
        &self.client_name
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
