//! Admin page management: CRUD, the protected home page, duplication and
//! builder block persistence.

use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::home::HOME_SLUG;
use crate::application::repos::{
    PageMetaParams, PageRepo, PageUpsertParams, SectionRepo, SectionUpsertParams,
};
use crate::domain::entities::PageRecord;
use crate::domain::error::DomainError;
use crate::domain::slug::sanitize_slug;

pub struct PageAdminService {
    pages: Arc<dyn PageRepo>,
    sections: Arc<dyn SectionRepo>,
}

impl PageAdminService {
    pub fn new(pages: Arc<dyn PageRepo>, sections: Arc<dyn SectionRepo>) -> Self {
        Self { pages, sections }
    }

    pub async fn list(&self) -> Result<Vec<PageRecord>, AppError> {
        Ok(self.pages.list_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<PageRecord, AppError> {
        self.pages
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("page").into())
    }

    pub async fn create(&self, mut params: PageUpsertParams) -> Result<PageRecord, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        // A blank slug falls back to the title.
        let source = if params.slug.trim().is_empty() {
            params.title.clone()
        } else {
            params.slug.clone()
        };
        params.slug =
            sanitize_slug(&source).map_err(|err| AppError::validation(err.to_string()))?;
        normalize_json_defaults(&mut params.faq_json, &mut params.schema_json);
        if params.page_blocks.trim().is_empty() {
            params.page_blocks = "[]".to_string();
        }
        // The create form carries no order field; new pages append to the nav.
        if params.nav_order == 0 {
            let pages = self.pages.list_all().await?;
            params.nav_order = pages.iter().map(|p| p.nav_order).max().unwrap_or(0) + 1;
        }
        Ok(self.pages.create(params).await?)
    }

    /// Save page metadata. The slug and the builder block list are never
    /// touched here; blocks change only through `save_blocks`.
    pub async fn update(
        &self,
        id: Uuid,
        mut params: PageMetaParams,
    ) -> Result<PageRecord, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        normalize_json_defaults(&mut params.faq_json, &mut params.schema_json);
        Ok(self.pages.update(id, params).await?)
    }

    /// Deleting the home page is refused; everything else cascades to its
    /// sections.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let page = self.get(id).await?;
        if page.slug == HOME_SLUG {
            return Err(DomainError::protected("home page").into());
        }
        Ok(self.pages.delete(id).await?)
    }

    /// Clone a page and its sections under a timestamped slug. The copy is
    /// hidden so it never appears on the public site until edited.
    pub async fn duplicate(&self, id: Uuid) -> Result<PageRecord, AppError> {
        let original = self.get(id).await?;
        let stamp = OffsetDateTime::now_utc().unix_timestamp();
        let params = PageUpsertParams {
            slug: format!("{}-copy-{stamp}", original.slug),
            title: format!("{} (Copy)", original.title),
            meta_description: original.meta_description.clone(),
            hero_title: original.hero_title.clone(),
            hero_subtitle: original.hero_subtitle.clone(),
            hero_label: original.hero_label.clone(),
            nav_order: original.nav_order,
            is_visible: false,
            template: original.template.clone(),
            schema_type: original.schema_type.clone(),
            schema_json: original.schema_json.clone(),
            faq_json: original.faq_json.clone(),
            page_blocks: original.page_blocks.clone(),
        };
        let copy = self.pages.create(params).await?;

        let sections = self.sections.list_for_page(original.id).await?;
        let cloned: Vec<SectionUpsertParams> = sections
            .into_iter()
            .map(|section| SectionUpsertParams {
                page_id: copy.id,
                kind: section.kind,
                title: section.title,
                description: section.description,
                content_html: section.content_html,
                image_url: section.image_url,
                video_url: section.video_url,
                icon: section.icon,
                icon_type: section.icon_type,
                icon_image_url: section.icon_image_url,
                tag: section.tag,
                sort_order: section.sort_order,
                extra_json: section.extra_json,
            })
            .collect();
        if !cloned.is_empty() {
            self.sections.create_many(cloned).await?;
        }

        Ok(copy)
    }

    /// Persist the visual-builder block list after checking it parses.
    pub async fn save_blocks(&self, id: Uuid, raw_blocks: &str) -> Result<(), AppError> {
        let trimmed = raw_blocks.trim();
        let stored = if trimmed.is_empty() { "[]" } else { trimmed };
        let parsed: serde_json::Value = serde_json::from_str(stored)
            .map_err(|_| AppError::validation("blocks payload is not valid JSON"))?;
        if !parsed.is_array() {
            return Err(AppError::validation("blocks payload must be a list"));
        }
        self.get(id).await?;
        Ok(self.pages.update_blocks(id, stored).await?)
    }
}

fn normalize_json_defaults(faq_json: &mut String, schema_json: &mut String) {
    if faq_json.trim().is_empty() {
        *faq_json = "[]".to_string();
    }
    if schema_json.trim().is_empty() {
        *schema_json = "{}".to_string();
    }
}
