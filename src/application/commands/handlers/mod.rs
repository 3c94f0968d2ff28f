//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod status_handlers;

pub use status_handlers::*;
