//! Admin section editing, including the extra-payload merges the section
//! form performs on save.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::repos::{SectionRepo, SectionUpsertParams};
use crate::domain::entities::SectionRecord;
use crate::domain::error::DomainError;
use crate::domain::home::reorder_assignments;
use crate::domain::sections::{PORTFOLIO_SECTION, merge_featured_home, merge_youtube_url};

/// Form fields that land in `extra_json` instead of a column of their own.
#[derive(Debug, Clone, Default)]
pub struct SectionExtras {
    pub youtube_url: Option<String>,
    pub featured_home_checkbox: Option<String>,
}

pub struct SectionAdminService {
    sections: Arc<dyn SectionRepo>,
}

impl SectionAdminService {
    pub fn new(sections: Arc<dyn SectionRepo>) -> Self {
        Self { sections }
    }

    pub async fn get(&self, id: Uuid) -> Result<SectionRecord, AppError> {
        self.sections
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("section").into())
    }

    pub async fn create(
        &self,
        mut params: SectionUpsertParams,
        extras: SectionExtras,
    ) -> Result<SectionRecord, AppError> {
        self.validate(&params)?;
        params.extra_json = apply_extras(&params.kind, &params.extra_json, &extras);
        Ok(self.sections.create(params).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        mut params: SectionUpsertParams,
        extras: SectionExtras,
    ) -> Result<SectionRecord, AppError> {
        self.validate(&params)?;
        // Merge against the stored payload so keys the form does not carry
        // survive the save.
        let current = self.get(id).await?;
        params.extra_json = if params.extra_json.trim().is_empty() {
            apply_extras(&params.kind, &current.extra_json, &extras)
        } else {
            apply_extras(&params.kind, &params.extra_json, &extras)
        };
        Ok(self.sections.update(id, params).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        Ok(self.sections.delete(id).await?)
    }

    /// Persist an explicit ordering; positions are authoritative and start
    /// at one.
    pub async fn reorder(&self, order: &[Uuid]) -> Result<(), AppError> {
        if order.is_empty() {
            return Ok(());
        }
        let assignments = reorder_assignments(order);
        Ok(self.sections.reorder(&assignments).await?)
    }

    /// Flip the home-curation flag without touching the rest of the row.
    pub async fn set_featured_home(&self, id: Uuid, featured: bool) -> Result<(), AppError> {
        let section = self.get(id).await?;
        let checkbox = featured.then_some("on");
        let merged = merge_featured_home(&section.extra_json, checkbox);
        Ok(self.sections.update_extra(id, &merged).await?)
    }

    fn validate(&self, params: &SectionUpsertParams) -> Result<(), AppError> {
        if params.kind.trim().is_empty() {
            return Err(AppError::validation("section type is required"));
        }
        Ok(())
    }
}

// The home-curation flag only applies to portfolio sections; other kinds
// never carry it.
fn apply_extras(kind: &str, extra_json: &str, extras: &SectionExtras) -> String {
    let mut merged = if extra_json.trim().is_empty() {
        "{}".to_string()
    } else {
        extra_json.to_string()
    };
    if let Some(url) = &extras.youtube_url {
        merged = merge_youtube_url(&merged, url);
    }
    if kind == PORTFOLIO_SECTION {
        merged = merge_featured_home(&merged, extras.featured_home_checkbox.as_deref());
    }
    merged
}
