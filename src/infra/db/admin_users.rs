use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::application::repos::{AdminUserRepo, RepoError};
use crate::domain::entities::AdminUserRecord;

use super::util::map_sqlx_error;

#[derive(sqlx::FromRow)]
struct AdminUserRow {
    id: Uuid,
    username: String,
    password_hash: String,
}

pub struct PostgresAdminUserRepo {
    pool: Arc<PgPool>,
}

impl PostgresAdminUserRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminUserRepo for PostgresAdminUserRepo {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUserRecord>, RepoError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            "SELECT id, username, password_hash FROM admin_users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(|row| AdminUserRecord {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
        }))
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<(), RepoError> {
        sqlx::query("INSERT INTO admin_users (username, password_hash) VALUES ($1, $2)")
            .bind(username)
            .bind(password_hash)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE admin_users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
