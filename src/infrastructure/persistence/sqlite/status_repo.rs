//! SQLite StatusCheck Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{RepositoryError, StatusCheckRepositoryPort};
use crate::domain::status::{ClientName, StatusCheck, StatusCheckId};

/// SQLite StatusCheck Repository
pub struct SqliteStatusCheckRepository {
    pool: DbPool,
}

impl SqliteStatusCheckRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StatusCheckRow {
    id: String,
    client_name: String,
    timestamp: String,
}

impl TryFrom<StatusCheckRow> for StatusCheck {
    type Error = RepositoryError;

    fn try_from(row: StatusCheckRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let client_name = ClientName::new(row.client_name)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
            .with_timezone(&Utc);

        Ok(StatusCheck::restore(
            StatusCheckId::from_uuid(id),
            client_name,
            timestamp,
        ))
    }
}

#[async_trait]
impl StatusCheckRepositoryPort for SqliteStatusCheckRepository {
    async fn save(&self, check: &StatusCheck) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO status_checks (id, client_name, timestamp) VALUES (?, ?, ?)")
            .bind(check.id().to_string())
            .bind(check.client_name().as_str())
            .bind(check.timestamp().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    RepositoryError::Duplicate(check.id().to_string())
                }
                e => RepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(())
    }

    async fn find_all(&self, limit: u32) -> Result<Vec<StatusCheck>, RepositoryError> {
        let rows: Vec<StatusCheckRow> = sqlx::query_as(
            "SELECT id, client_name, timestamp FROM status_checks ORDER BY rowid LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(StatusCheck::try_from).collect()
    }
}
