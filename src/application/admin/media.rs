//! Media library records. Byte storage is the upload store's job; this
//! service owns the catalogue rows.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::repos::{MediaMetaParams, MediaRepo, NewMediaParams};
use crate::domain::entities::MediaRecord;
use crate::domain::error::DomainError;

pub struct MediaAdminService {
    media: Arc<dyn MediaRepo>,
}

impl MediaAdminService {
    pub fn new(media: Arc<dyn MediaRepo>) -> Self {
        Self { media }
    }

    pub async fn list(&self) -> Result<Vec<MediaRecord>, AppError> {
        Ok(self.media.list().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<MediaRecord, AppError> {
        self.media
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("media item").into())
    }

    pub async fn register(&self, params: NewMediaParams) -> Result<MediaRecord, AppError> {
        if params.filename.trim().is_empty() {
            return Err(AppError::validation("stored filename is required"));
        }
        Ok(self.media.insert(params).await?)
    }

    pub async fn update_meta(
        &self,
        id: Uuid,
        params: MediaMetaParams,
    ) -> Result<MediaRecord, AppError> {
        self.media.update_meta(id, params).await?;
        self.get(id).await
    }

    /// Remove the row and hand back the stored filename so the caller can
    /// unlink the file.
    pub async fn delete(&self, id: Uuid) -> Result<String, AppError> {
        let record = self.get(id).await?;
        self.media.delete(id).await?;
        Ok(record.filename)
    }
}
