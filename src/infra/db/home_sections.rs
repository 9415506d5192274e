use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::application::repos::{HomeSectionRepo, HomeSectionUpdateParams, RepoError};
use crate::domain::entities::HomeSectionRecord;

use super::util::map_sqlx_error;

const HOME_SECTION_COLUMNS: &str =
    "id, section_key, label, heading, subtitle, sort_order, is_visible, config_json";

#[derive(sqlx::FromRow)]
struct HomeSectionRow {
    id: Uuid,
    section_key: String,
    label: String,
    heading: String,
    subtitle: String,
    sort_order: i32,
    is_visible: bool,
    config_json: String,
}

impl From<HomeSectionRow> for HomeSectionRecord {
    fn from(row: HomeSectionRow) -> Self {
        HomeSectionRecord {
            id: row.id,
            section_key: row.section_key,
            label: row.label,
            heading: row.heading,
            subtitle: row.subtitle,
            sort_order: row.sort_order,
            is_visible: row.is_visible,
            config_json: row.config_json,
        }
    }
}

pub struct PostgresHomeSectionRepo {
    pool: Arc<PgPool>,
}

impl PostgresHomeSectionRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HomeSectionRepo for PostgresHomeSectionRepo {
    async fn list(&self) -> Result<Vec<HomeSectionRecord>, RepoError> {
        let rows = sqlx::query_as::<_, HomeSectionRow>(&format!(
            "SELECT {HOME_SECTION_COLUMNS} FROM home_sections ORDER BY sort_order"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<HomeSectionRecord>, RepoError> {
        let row = sqlx::query_as::<_, HomeSectionRow>(&format!(
            "SELECT {HOME_SECTION_COLUMNS} FROM home_sections WHERE section_key = $1"
        ))
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn update(
        &self,
        key: &str,
        params: HomeSectionUpdateParams,
    ) -> Result<HomeSectionRecord, RepoError> {
        let row = sqlx::query_as::<_, HomeSectionRow>(&format!(
            "UPDATE home_sections SET label = $2, heading = $3, subtitle = $4, \
             is_visible = $5, config_json = $6 WHERE section_key = $1 \
             RETURNING {HOME_SECTION_COLUMNS}"
        ))
        .bind(key)
        .bind(&params.label)
        .bind(&params.heading)
        .bind(&params.subtitle)
        .bind(params.is_visible)
        .bind(&params.config_json)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        row.map(Into::into).ok_or(RepoError::NotFound)
    }

    async fn set_visibility(&self, key: &str, visible: bool) -> Result<bool, RepoError> {
        let row: Option<(bool,)> = sqlx::query_as(
            "UPDATE home_sections SET is_visible = $2 WHERE section_key = $1 \
             RETURNING is_visible",
        )
        .bind(key)
        .bind(visible)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        row.map(|(v,)| v).ok_or(RepoError::NotFound)
    }

    async fn reorder(&self, assignments: &[(Uuid, i32)]) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        for (id, sort_order) in assignments {
            sqlx::query("UPDATE home_sections SET sort_order = $2 WHERE id = $1")
                .bind(id)
                .bind(sort_order)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }
        tx.commit().await.map_err(map_sqlx_error)
    }
}
