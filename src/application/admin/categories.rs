//! Category management for both the portfolio and blog taxonomies.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::repos::{CategoryRepo, CategoryUpsertParams};
use crate::domain::entities::CategoryRecord;
use crate::domain::slug::category_slug;
use crate::domain::types::CategoryKind;

pub struct CategoryAdminService {
    categories: Arc<dyn CategoryRepo>,
}

impl CategoryAdminService {
    pub fn new(categories: Arc<dyn CategoryRepo>) -> Self {
        Self { categories }
    }

    pub async fn list(&self, kind: CategoryKind) -> Result<Vec<CategoryRecord>, AppError> {
        Ok(self.categories.list(kind).await?)
    }

    pub async fn create(
        &self,
        kind: CategoryKind,
        name: &str,
        description: String,
        sort_order: i32,
    ) -> Result<CategoryRecord, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("category name is required"));
        }
        let slug =
            category_slug(name).map_err(|err| AppError::validation(err.to_string()))?;
        Ok(self
            .categories
            .create(CategoryUpsertParams {
                kind,
                name: name.to_string(),
                slug,
                description,
                sort_order,
            })
            .await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        kind: CategoryKind,
        name: &str,
        description: String,
        sort_order: i32,
    ) -> Result<CategoryRecord, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("category name is required"));
        }
        let slug =
            category_slug(name).map_err(|err| AppError::validation(err.to_string()))?;
        Ok(self
            .categories
            .update(
                id,
                CategoryUpsertParams {
                    kind,
                    name: name.to_string(),
                    slug,
                    description,
                    sort_order,
                },
            )
            .await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        Ok(self.categories.delete(id).await?)
    }
}
