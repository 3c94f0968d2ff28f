//! HTTP Handlers

mod drama;
mod root;
mod status;

pub use drama::*;
pub use root::*;
pub use status::*;
