use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::application::repos::{HeroBannerRepo, HeroBannerUpsertParams, RepoError};
use crate::domain::entities::HeroBannerRecord;

use super::util::map_sqlx_error;

const BANNER_COLUMNS: &str = "id, page_id, image_url, overlay_title, overlay_subtitle, \
     overlay_position, sort_order, is_active, alt_text, seo_title";

#[derive(sqlx::FromRow)]
struct HeroBannerRow {
    id: Uuid,
    page_id: Uuid,
    image_url: String,
    overlay_title: String,
    overlay_subtitle: String,
    overlay_position: String,
    sort_order: i32,
    is_active: bool,
    alt_text: String,
    seo_title: String,
}

impl From<HeroBannerRow> for HeroBannerRecord {
    fn from(row: HeroBannerRow) -> Self {
        HeroBannerRecord {
            id: row.id,
            page_id: row.page_id,
            image_url: row.image_url,
            overlay_title: row.overlay_title,
            overlay_subtitle: row.overlay_subtitle,
            overlay_position: row.overlay_position,
            sort_order: row.sort_order,
            is_active: row.is_active,
            alt_text: row.alt_text,
            seo_title: row.seo_title,
        }
    }
}

pub struct PostgresHeroBannerRepo {
    pool: Arc<PgPool>,
}

impl PostgresHeroBannerRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeroBannerRepo for PostgresHeroBannerRepo {
    async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<HeroBannerRecord>, RepoError> {
        let rows = sqlx::query_as::<_, HeroBannerRow>(&format!(
            "SELECT {BANNER_COLUMNS} FROM hero_banners WHERE page_id = $1 ORDER BY sort_order"
        ))
        .bind(page_id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_active_for_page(
        &self,
        page_id: Uuid,
    ) -> Result<Vec<HeroBannerRecord>, RepoError> {
        let rows = sqlx::query_as::<_, HeroBannerRow>(&format!(
            "SELECT {BANNER_COLUMNS} FROM hero_banners WHERE page_id = $1 AND is_active \
             ORDER BY sort_order"
        ))
        .bind(page_id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HeroBannerRecord>, RepoError> {
        let row = sqlx::query_as::<_, HeroBannerRow>(&format!(
            "SELECT {BANNER_COLUMNS} FROM hero_banners WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn create(
        &self,
        params: HeroBannerUpsertParams,
    ) -> Result<HeroBannerRecord, RepoError> {
        let row = sqlx::query_as::<_, HeroBannerRow>(&format!(
            "INSERT INTO hero_banners (page_id, image_url, overlay_title, overlay_subtitle, \
             overlay_position, sort_order, is_active, alt_text, seo_title) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {BANNER_COLUMNS}"
        ))
        .bind(params.page_id)
        .bind(&params.image_url)
        .bind(&params.overlay_title)
        .bind(&params.overlay_subtitle)
        .bind(&params.overlay_position)
        .bind(params.sort_order)
        .bind(params.is_active)
        .bind(&params.alt_text)
        .bind(&params.seo_title)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: Uuid,
        params: HeroBannerUpsertParams,
    ) -> Result<HeroBannerRecord, RepoError> {
        let row = sqlx::query_as::<_, HeroBannerRow>(&format!(
            "UPDATE hero_banners SET page_id = $2, image_url = $3, overlay_title = $4, \
             overlay_subtitle = $5, overlay_position = $6, sort_order = $7, is_active = $8, \
             alt_text = $9, seo_title = $10 WHERE id = $1 RETURNING {BANNER_COLUMNS}"
        ))
        .bind(id)
        .bind(params.page_id)
        .bind(&params.image_url)
        .bind(&params.overlay_title)
        .bind(&params.overlay_subtitle)
        .bind(&params.overlay_position)
        .bind(params.sort_order)
        .bind(params.is_active)
        .bind(&params.alt_text)
        .bind(&params.seo_title)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        row.map(Into::into).ok_or(RepoError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM hero_banners WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn reorder(&self, assignments: &[(Uuid, i32)]) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        for (id, sort_order) in assignments {
            sqlx::query("UPDATE hero_banners SET sort_order = $2 WHERE id = $1")
                .bind(id)
                .bind(sort_order)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }
        tx.commit().await.map_err(map_sqlx_error)
    }
}
