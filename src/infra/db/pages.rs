use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{PageMetaParams, PageRepo, PageUpsertParams, RepoError};
use crate::domain::entities::PageRecord;
use crate::domain::types::PageTemplate;

use super::util::map_sqlx_error;

const PAGE_COLUMNS: &str = "id, slug, title, meta_description, hero_title, hero_subtitle, \
     hero_label, nav_order, is_visible, template, schema_type, schema_json, faq_json, \
     page_blocks, updated_at";

#[derive(sqlx::FromRow)]
struct PageRow {
    id: Uuid,
    slug: String,
    title: String,
    meta_description: String,
    hero_title: String,
    hero_subtitle: String,
    hero_label: String,
    nav_order: i32,
    is_visible: bool,
    template: String,
    schema_type: String,
    schema_json: String,
    faq_json: String,
    page_blocks: String,
    updated_at: OffsetDateTime,
}

impl From<PageRow> for PageRecord {
    fn from(row: PageRow) -> Self {
        PageRecord {
            id: row.id,
            slug: row.slug,
            title: row.title,
            meta_description: row.meta_description,
            hero_title: row.hero_title,
            hero_subtitle: row.hero_subtitle,
            hero_label: row.hero_label,
            nav_order: row.nav_order,
            is_visible: row.is_visible,
            template: PageTemplate::parse(&row.template),
            schema_type: row.schema_type,
            schema_json: row.schema_json,
            faq_json: row.faq_json,
            page_blocks: row.page_blocks,
            updated_at: row.updated_at,
        }
    }
}

pub struct PostgresPageRepo {
    pool: Arc<PgPool>,
}

impl PostgresPageRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRepo for PostgresPageRepo {
    async fn list_all(&self) -> Result<Vec<PageRecord>, RepoError> {
        let rows = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages ORDER BY nav_order, slug"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_visible(&self) -> Result<Vec<PageRecord>, RepoError> {
        let rows = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE is_visible ORDER BY nav_order, slug"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PageRecord>, RepoError> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PageRecord>, RepoError> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, params: PageUpsertParams) -> Result<PageRecord, RepoError> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "INSERT INTO pages (slug, title, meta_description, hero_title, hero_subtitle, \
             hero_label, nav_order, is_visible, template, schema_type, schema_json, faq_json, \
             page_blocks) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {PAGE_COLUMNS}"
        ))
        .bind(&params.slug)
        .bind(&params.title)
        .bind(&params.meta_description)
        .bind(&params.hero_title)
        .bind(&params.hero_subtitle)
        .bind(&params.hero_label)
        .bind(params.nav_order)
        .bind(params.is_visible)
        .bind(params.template.as_str())
        .bind(&params.schema_type)
        .bind(&params.schema_json)
        .bind(&params.faq_json)
        .bind(&params.page_blocks)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    // Slug and page_blocks are deliberately absent from the column list: the
    // slug never changes after create and blocks go through update_blocks.
    async fn update(&self, id: Uuid, params: PageMetaParams) -> Result<PageRecord, RepoError> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "UPDATE pages SET title = $2, meta_description = $3, hero_title = $4, \
             hero_subtitle = $5, hero_label = $6, nav_order = $7, is_visible = $8, \
             template = $9, schema_type = $10, schema_json = $11, faq_json = $12, \
             updated_at = now() \
             WHERE id = $1 RETURNING {PAGE_COLUMNS}"
        ))
        .bind(id)
        .bind(&params.title)
        .bind(&params.meta_description)
        .bind(&params.hero_title)
        .bind(&params.hero_subtitle)
        .bind(&params.hero_label)
        .bind(params.nav_order)
        .bind(params.is_visible)
        .bind(params.template.as_str())
        .bind(&params.schema_type)
        .bind(&params.schema_json)
        .bind(&params.faq_json)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        row.map(Into::into).ok_or(RepoError::NotFound)
    }

    async fn update_blocks(&self, id: Uuid, page_blocks: &str) -> Result<(), RepoError> {
        let result =
            sqlx::query("UPDATE pages SET page_blocks = $2, updated_at = now() WHERE id = $1")
                .bind(id)
                .bind(page_blocks)
                .execute(self.pool.as_ref())
                .await
                .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        // Sections cascade via the foreign key.
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
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
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pages")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(count.0)
    }
}
