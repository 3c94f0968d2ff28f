//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod drama_handlers;
mod status_handlers;

pub use drama_handlers::*;
pub use status_handlers::*;
