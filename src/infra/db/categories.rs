use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::application::repos::{CategoryRepo, CategoryUpsertParams, RepoError};
use crate::domain::entities::CategoryRecord;
use crate::domain::types::CategoryKind;

use super::util::map_sqlx_error;

const CATEGORY_COLUMNS: &str = "id, kind, name, slug, description, sort_order";

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    kind: CategoryKind,
    name: String,
    slug: String,
    description: String,
    sort_order: i32,
}

impl From<CategoryRow> for CategoryRecord {
    fn from(row: CategoryRow) -> Self {
        CategoryRecord {
            id: row.id,
            kind: row.kind,
            name: row.name,
            slug: row.slug,
            description: row.description,
            sort_order: row.sort_order,
        }
    }
}

pub struct PostgresCategoryRepo {
    pool: Arc<PgPool>,
}

impl PostgresCategoryRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepo for PostgresCategoryRepo {
    async fn list(&self, kind: CategoryKind) -> Result<Vec<CategoryRecord>, RepoError> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE kind = $1 ORDER BY sort_order, name"
        ))
        .bind(kind)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoryRecord>, RepoError> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, params: CategoryUpsertParams) -> Result<CategoryRecord, RepoError> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (kind, name, slug, description, sort_order) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(params.kind)
        .bind(&params.name)
        .bind(&params.slug)
        .bind(&params.description)
        .bind(params.sort_order)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: Uuid,
        params: CategoryUpsertParams,
    ) -> Result<CategoryRecord, RepoError> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "UPDATE categories SET kind = $2, name = $3, slug = $4, description = $5, \
             sort_order = $6 WHERE id = $1 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(id)
        .bind(params.kind)
        .bind(&params.name)
        .bind(&params.slug)
        .bind(&params.description)
        .bind(params.sort_order)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        row.map(Into::into).ok_or(RepoError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
