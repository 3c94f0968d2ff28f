//! Drama Context - 剧集代理限界上下文
//!
//! 职责:
//! - 上游凭证与请求头组装
//! - 上游响应的防御式解包
//! - 分页、集数等请求参数

pub mod credentials;
pub mod envelope;
mod errors;
mod value_objects;

pub use credentials::{build_headers, DeviceProfile, HeaderSet, TokenRecord};
pub use envelope::{extract_latest, extract_stream, extract_suggestions, Lookup, StreamLink};
pub use errors::DramaError;
pub use value_objects::{BookId, Episode, Keyword, PageNo};
