//! Status Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{StatusCheckRepositoryPort, STATUS_CHECK_LIST_LIMIT};
use crate::application::queries::ListStatusChecks;
use crate::domain::status::StatusCheck;

/// ListStatusChecks Handler
pub struct ListStatusChecksHandler {
    status_repo: Arc<dyn StatusCheckRepositoryPort>,
}

impl ListStatusChecksHandler {
    pub fn new(status_repo: Arc<dyn StatusCheckRepositoryPort>) -> Self {
        Self { status_repo }
    }

    pub async fn handle(&self, _query: ListStatusChecks) -> Result<Vec<StatusCheck>, ApplicationError> {
        let checks = self.status_repo.find_all(STATUS_CHECK_LIST_LIMIT).await?;
        Ok(checks)
    }
}
