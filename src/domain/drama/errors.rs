//! Drama Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DramaError {
    #[error("page must be a positive integer, got {0}")]
    InvalidPage(i64),
}
