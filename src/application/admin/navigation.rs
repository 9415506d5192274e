//! Navigation link and client logo management.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::repos::{
    ClientLogoRepo, ClientLogoUpsertParams, NavLinkRepo, NavLinkUpsertParams,
};
use crate::domain::entities::{ClientLogoRecord, NavLinkRecord};
use crate::domain::error::DomainError;
use crate::domain::navigation::cascade_delete_ids;

pub struct NavigationAdminService {
    nav_links: Arc<dyn NavLinkRepo>,
    logos: Arc<dyn ClientLogoRepo>,
}

impl NavigationAdminService {
    pub fn new(nav_links: Arc<dyn NavLinkRepo>, logos: Arc<dyn ClientLogoRepo>) -> Self {
        Self { nav_links, logos }
    }

    pub async fn list_links(&self) -> Result<Vec<NavLinkRecord>, AppError> {
        Ok(self.nav_links.list().await?)
    }

    pub async fn create_link(
        &self,
        params: NavLinkUpsertParams,
    ) -> Result<NavLinkRecord, AppError> {
        self.validate_link(&params, None).await?;
        Ok(self.nav_links.create(params).await?)
    }

    pub async fn update_link(
        &self,
        id: Uuid,
        params: NavLinkUpsertParams,
    ) -> Result<NavLinkRecord, AppError> {
        self.validate_link(&params, Some(id)).await?;
        Ok(self.nav_links.update(id, params).await?)
    }

    /// Deleting a parent takes its direct children with it.
    pub async fn delete_link(&self, id: Uuid) -> Result<(), AppError> {
        let links = self.nav_links.list().await?;
        if !links.iter().any(|link| link.id == id) {
            return Err(DomainError::not_found("navigation link").into());
        }
        let ids = cascade_delete_ids(&links, id);
        Ok(self.nav_links.delete_many(&ids).await?)
    }

    async fn validate_link(
        &self,
        params: &NavLinkUpsertParams,
        updating: Option<Uuid>,
    ) -> Result<(), AppError> {
        if params.label.trim().is_empty() {
            return Err(AppError::validation("label is required"));
        }
        if params.url.trim().is_empty() {
            return Err(AppError::validation("url is required"));
        }
        if let Some(parent_id) = params.parent_id {
            if updating == Some(parent_id) {
                return Err(AppError::validation("a link cannot be its own parent"));
            }
            let parent = self
                .nav_links
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::validation("parent link does not exist"))?;
            // One level of nesting only.
            if parent.parent_id.is_some() {
                return Err(AppError::validation("dropdown items cannot have children"));
            }
        }
        Ok(())
    }

    pub async fn list_logos(&self) -> Result<Vec<ClientLogoRecord>, AppError> {
        Ok(self.logos.list().await?)
    }

    pub async fn create_logo(
        &self,
        params: ClientLogoUpsertParams,
    ) -> Result<ClientLogoRecord, AppError> {
        if params.image_url.trim().is_empty() {
            return Err(AppError::validation("logo image is required"));
        }
        Ok(self.logos.create(params).await?)
    }

    pub async fn update_logo(
        &self,
        id: Uuid,
        params: ClientLogoUpsertParams,
    ) -> Result<ClientLogoRecord, AppError> {
        Ok(self.logos.update(id, params).await?)
    }

    pub async fn delete_logo(&self, id: Uuid) -> Result<(), AppError> {
        Ok(self.logos.delete(id).await?)
    }
}
