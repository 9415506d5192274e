//! Hero banner carousel management per page.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::repos::{HeroBannerRepo, HeroBannerUpsertParams};
use crate::domain::entities::HeroBannerRecord;
use crate::domain::error::DomainError;
use crate::domain::home::reorder_assignments;

pub struct BannerAdminService {
    banners: Arc<dyn HeroBannerRepo>,
}

impl BannerAdminService {
    pub fn new(banners: Arc<dyn HeroBannerRepo>) -> Self {
        Self { banners }
    }

    pub async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<HeroBannerRecord>, AppError> {
        Ok(self.banners.list_for_page(page_id).await?)
    }

    pub async fn create(
        &self,
        params: HeroBannerUpsertParams,
    ) -> Result<HeroBannerRecord, AppError> {
        if params.image_url.trim().is_empty() {
            return Err(AppError::validation("banner image is required"));
        }
        Ok(self.banners.create(params).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: HeroBannerUpsertParams,
    ) -> Result<HeroBannerRecord, AppError> {
        Ok(self.banners.update(id, params).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.banners
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("hero banner"))?;
        Ok(self.banners.delete(id).await?)
    }

    pub async fn reorder(&self, order: &[Uuid]) -> Result<(), AppError> {
        if order.is_empty() {
            return Ok(());
        }
        Ok(self.banners.reorder(&reorder_assignments(order)).await?)
    }
}
