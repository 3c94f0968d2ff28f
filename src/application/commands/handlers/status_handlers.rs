//! Status Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateStatusCheck;
use crate::application::error::ApplicationError;
use crate::application::ports::StatusCheckRepositoryPort;
use crate::domain::status::{ClientName, StatusCheck};

/// CreateStatusCheck Handler
pub struct CreateStatusCheckHandler {
    status_repo: Arc<dyn StatusCheckRepositoryPort>,
}

impl CreateStatusCheckHandler {
    pub fn new(status_repo: Arc<dyn StatusCheckRepositoryPort>) -> Self {
        Self { status_repo }
    }

    pub async fn handle(&self, command: CreateStatusCheck) -> Result<StatusCheck, ApplicationError> {
        let client_name = ClientName::new(command.client_name)?;
        let check = StatusCheck::new(client_name);

        self.status_repo.save(&check).await?;

        tracing::info!(
            status_check_id = %check.id(),
            client_name = %check.client_name(),
            "Status check created"
        );

        Ok(check)
    }
}
