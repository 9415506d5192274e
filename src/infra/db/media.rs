use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{MediaMetaParams, MediaRepo, NewMediaParams, RepoError};
use crate::domain::entities::MediaRecord;

use super::util::map_sqlx_error;

const MEDIA_COLUMNS: &str = "id, filename, original_name, mime_type, size_bytes, alt_text, \
     seo_title, seo_caption, uploaded_at";

#[derive(sqlx::FromRow)]
struct MediaRow {
    id: Uuid,
    filename: String,
    original_name: String,
    mime_type: String,
    size_bytes: i64,
    alt_text: String,
    seo_title: String,
    seo_caption: String,
    uploaded_at: OffsetDateTime,
}

impl From<MediaRow> for MediaRecord {
    fn from(row: MediaRow) -> Self {
        MediaRecord {
            id: row.id,
            filename: row.filename,
            original_name: row.original_name,
            mime_type: row.mime_type,
            size_bytes: row.size_bytes,
            alt_text: row.alt_text,
            seo_title: row.seo_title,
            seo_caption: row.seo_caption,
            uploaded_at: row.uploaded_at,
        }
    }
}

pub struct PostgresMediaRepo {
    pool: Arc<PgPool>,
}

impl PostgresMediaRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaRepo for PostgresMediaRepo {
    async fn list(&self) -> Result<Vec<MediaRecord>, RepoError> {
        let rows = sqlx::query_as::<_, MediaRow>(&format!(
            "SELECT {MEDIA_COLUMNS} FROM media ORDER BY uploaded_at DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaRecord>, RepoError> {
        let row = sqlx::query_as::<_, MediaRow>(&format!(
            "SELECT {MEDIA_COLUMNS} FROM media WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, params: NewMediaParams) -> Result<MediaRecord, RepoError> {
        let row = sqlx::query_as::<_, MediaRow>(&format!(
            "INSERT INTO media (filename, original_name, mime_type, size_bytes, alt_text) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {MEDIA_COLUMNS}"
        ))
        .bind(&params.filename)
        .bind(&params.original_name)
        .bind(&params.mime_type)
        .bind(params.size_bytes)
        .bind(&params.alt_text)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn update_meta(&self, id: Uuid, params: MediaMetaParams) -> Result<(), RepoError> {
        let result = sqlx::query(
            "UPDATE media SET alt_text = $2, seo_title = $3, seo_caption = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&params.alt_text)
        .bind(&params.seo_title)
        .bind(&params.seo_caption)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(count.0)
    }
}
