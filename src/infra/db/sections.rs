use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::application::repos::{RepoError, SectionRepo, SectionUpsertParams};
use crate::domain::entities::SectionRecord;

use super::util::map_sqlx_error;

const SECTION_COLUMNS: &str = "id, page_id, kind, title, description, content_html, image_url, \
     video_url, icon, icon_type, icon_image_url, tag, sort_order, extra_json";

#[derive(sqlx::FromRow)]
struct SectionRow {
    id: Uuid,
    page_id: Uuid,
    kind: String,
    title: String,
    description: String,
    content_html: String,
    image_url: String,
    video_url: String,
    icon: String,
    icon_type: String,
    icon_image_url: String,
    tag: String,
    sort_order: i32,
    extra_json: String,
}

impl From<SectionRow> for SectionRecord {
    fn from(row: SectionRow) -> Self {
        SectionRecord {
            id: row.id,
            page_id: row.page_id,
            kind: row.kind,
            title: row.title,
            description: row.description,
            content_html: row.content_html,
            image_url: row.image_url,
            video_url: row.video_url,
            icon: row.icon,
            icon_type: row.icon_type,
            icon_image_url: row.icon_image_url,
            tag: row.tag,
            sort_order: row.sort_order,
            extra_json: row.extra_json,
        }
    }
}

pub struct PostgresSectionRepo {
    pool: Arc<PgPool>,
}

impl PostgresSectionRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn bind_params<'q>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, SectionRow, sqlx::postgres::PgArguments>,
    params: &'q SectionUpsertParams,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, SectionRow, sqlx::postgres::PgArguments> {
    query
        .bind(params.page_id)
        .bind(&params.kind)
        .bind(&params.title)
        .bind(&params.description)
        .bind(&params.content_html)
        .bind(&params.image_url)
        .bind(&params.video_url)
        .bind(&params.icon)
        .bind(&params.icon_type)
        .bind(&params.icon_image_url)
        .bind(&params.tag)
        .bind(params.sort_order)
        .bind(&params.extra_json)
}

#[async_trait]
impl SectionRepo for PostgresSectionRepo {
    async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<SectionRecord>, RepoError> {
        let rows = sqlx::query_as::<_, SectionRow>(&format!(
            "SELECT {SECTION_COLUMNS} FROM sections WHERE page_id = $1 ORDER BY sort_order, id"
        ))
        .bind(page_id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SectionRecord>, RepoError> {
        let row = sqlx::query_as::<_, SectionRow>(&format!(
            "SELECT {SECTION_COLUMNS} FROM sections WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, params: SectionUpsertParams) -> Result<SectionRecord, RepoError> {
        let sql = format!(
            "INSERT INTO sections (page_id, kind, title, description, content_html, image_url, \
             video_url, icon, icon_type, icon_image_url, tag, sort_order, extra_json) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {SECTION_COLUMNS}"
        );
        let row = bind_params(sqlx::query_as::<_, SectionRow>(&sql), &params)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: Uuid,
        params: SectionUpsertParams,
    ) -> Result<SectionRecord, RepoError> {
        let sql = format!(
            "UPDATE sections SET page_id = $1, kind = $2, title = $3, description = $4, \
             content_html = $5, image_url = $6, video_url = $7, icon = $8, icon_type = $9, \
             icon_image_url = $10, tag = $11, sort_order = $12, extra_json = $13 \
             WHERE id = $14 RETURNING {SECTION_COLUMNS}"
        );
        let row = bind_params(sqlx::query_as::<_, SectionRow>(&sql), &params)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        row.map(Into::into).ok_or(RepoError::NotFound)
    }

    async fn update_extra(&self, id: Uuid, extra_json: &str) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE sections SET extra_json = $2 WHERE id = $1")
            .bind(id)
            .bind(extra_json)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    /// All positions land in one transaction so a reorder never partially
    /// applies.
    async fn reorder(&self, assignments: &[(Uuid, i32)]) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        for (id, sort_order) in assignments {
            sqlx::query("UPDATE sections SET sort_order = $2 WHERE id = $1")
                .bind(id)
                .bind(sort_order)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }
        tx.commit().await.map_err(map_sqlx_error)
    }

    async fn create_many(&self, params: Vec<SectionUpsertParams>) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        for param in &params {
            sqlx::query(
                "INSERT INTO sections (page_id, kind, title, description, content_html, \
                 image_url, video_url, icon, icon_type, icon_image_url, tag, sort_order, \
                 extra_json) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
            )
            .bind(param.page_id)
            .bind(&param.kind)
            .bind(&param.title)
            .bind(&param.description)
            .bind(&param.content_html)
            .bind(&param.image_url)
            .bind(&param.video_url)
            .bind(&param.icon)
            .bind(&param.icon_type)
            .bind(&param.icon_image_url)
            .bind(&param.tag)
            .bind(param.sort_order)
            .bind(&param.extra_json)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }
        tx.commit().await.map_err(map_sqlx_error)
    }
}
