//! Home layout management: per-key edits, visibility toggles and ordering.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::repos::{HomeSectionRepo, HomeSectionUpdateParams};
use crate::domain::error::DomainError;
use crate::domain::home::{
    config_from_form, reorder_assignments, HomeSectionKey, HomeSectionView,
};

pub struct HomeSectionAdminService {
    repo: Arc<dyn HomeSectionRepo>,
}

impl HomeSectionAdminService {
    pub fn new(repo: Arc<dyn HomeSectionRepo>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<HomeSectionView>, AppError> {
        Ok(self
            .repo
            .list()
            .await?
            .into_iter()
            .map(HomeSectionView::from)
            .collect())
    }

    /// Save one section's copy and config. The config arrives either as a
    /// raw JSON textarea or as `cfg_`-prefixed inputs.
    pub async fn update(
        &self,
        key: &str,
        label: String,
        heading: String,
        subtitle: String,
        is_visible: bool,
        config_json: Option<&str>,
        form_fields: &[(String, String)],
    ) -> Result<HomeSectionView, AppError> {
        let key = known_key(key)?;
        let config_json = config_from_form(config_json, form_fields);
        let record = self
            .repo
            .update(
                key.as_str(),
                HomeSectionUpdateParams {
                    label,
                    heading,
                    subtitle,
                    is_visible,
                    config_json,
                },
            )
            .await?;
        Ok(record.into())
    }

    pub async fn toggle(&self, key: &str) -> Result<bool, AppError> {
        let key = known_key(key)?;
        let current = self
            .repo
            .find_by_key(key.as_str())
            .await?
            .ok_or_else(|| DomainError::not_found("home section"))?;
        Ok(self
            .repo
            .set_visibility(key.as_str(), !current.is_visible)
            .await?)
    }

    pub async fn reorder(&self, order: &[Uuid]) -> Result<(), AppError> {
        if order.is_empty() {
            return Ok(());
        }
        Ok(self.repo.reorder(&reorder_assignments(order)).await?)
    }
}

fn known_key(key: &str) -> Result<HomeSectionKey, AppError> {
    HomeSectionKey::parse(key)
        .ok_or_else(|| AppError::validation(format!("unknown home section `{key}`")))
}
