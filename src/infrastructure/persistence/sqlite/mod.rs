//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod status_repo;

pub use database::*;
pub use status_repo::*;
