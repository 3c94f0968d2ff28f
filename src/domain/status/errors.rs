//! Status Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("client_name must not be empty")]
    EmptyClientName,
}
