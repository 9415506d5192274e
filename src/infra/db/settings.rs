use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use crate::application::repos::{RepoError, SettingsRepo};

use super::util::map_sqlx_error;

pub struct PostgresSettingsRepo {
    pool: Arc<PgPool>,
}

impl PostgresSettingsRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepo for PostgresSettingsRepo {
    async fn load_all(&self) -> Result<Vec<(String, String)>, RepoError> {
        sqlx::query_as::<_, (String, String)>("SELECT key, value FROM settings ORDER BY key")
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn upsert_many(&self, entries: &[(String, String)]) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        for (key, value) in entries {
            sqlx::query(
                "INSERT INTO settings (key, value) VALUES ($1, $2) \
                 ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }
        tx.commit().await.map_err(map_sqlx_error)
    }
}
