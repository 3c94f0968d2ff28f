//! Status Context - 状态检查记录
//!
//! 与代理无关的简单 CRUD 资源

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::StatusCheck;
pub use errors::StatusError;
pub use value_objects::{ClientName, StatusCheckId};
