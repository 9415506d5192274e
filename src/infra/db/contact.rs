use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{ContactRepo, NewContactParams, RepoError};
use crate::domain::entities::ContactSubmissionRecord;

use super::util::map_sqlx_error;

const CONTACT_COLUMNS: &str = "id, name, email, company, message, status, created_at";

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: Uuid,
    name: String,
    email: String,
    company: String,
    message: String,
    status: String,
    created_at: OffsetDateTime,
}

impl From<ContactRow> for ContactSubmissionRecord {
    fn from(row: ContactRow) -> Self {
        ContactSubmissionRecord {
            id: row.id,
            name: row.name,
            email: row.email,
            company: row.company,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

pub struct PostgresContactRepo {
    pool: Arc<PgPool>,
}

impl PostgresContactRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepo for PostgresContactRepo {
    async fn insert(
        &self,
        params: NewContactParams,
    ) -> Result<ContactSubmissionRecord, RepoError> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "INSERT INTO contact_submissions (name, email, company, message) \
             VALUES ($1, $2, $3, $4) RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(&params.name)
        .bind(&params.email)
        .bind(&params.company)
        .bind(&params.message)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<ContactSubmissionRecord>, RepoError> {
        let rows = sqlx::query_as::<_, ContactRow>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_submissions ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE contact_submissions SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count_with_status(&self, status: &str) -> Result<i64, RepoError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM contact_submissions WHERE status = $1")
                .bind(status)
                .fetch_one(self.pool.as_ref())
                .await
                .map_err(map_sqlx_error)?;
        Ok(count.0)
    }
}
