use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::types::CategoryKind;
use crate::presentation::views::{AdminCategoriesTemplate, render_template_response};

use super::{
    AdminState,
    shared::{SavedQuery, redirect_saved},
};

fn parse_kind(value: &str) -> CategoryKind {
    if value == "portfolio" {
        CategoryKind::Portfolio
    } else {
        CategoryKind::Blog
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct CategoryForm {
    kind: String,
    name: String,
    description: String,
    sort_order: Option<i32>,
}

pub(super) async fn admin_categories(
    State(state): State<AdminState>,
    Query(query): Query<SavedQuery>,
) -> Response {
    let portfolio = match state.categories.list(CategoryKind::Portfolio).await {
        Ok(rows) => rows,
        Err(err) => return err.into_response(),
    };
    match state.categories.list(CategoryKind::Blog).await {
        Ok(blog) => render_template_response(
            AdminCategoriesTemplate {
                portfolio,
                blog,
                saved: query.saved.is_some(),
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_category_create(
    State(state): State<AdminState>,
    Form(form): Form<CategoryForm>,
) -> Response {
    match state
        .categories
        .create(
            parse_kind(&form.kind),
            &form.name,
            form.description,
            form.sort_order.unwrap_or(0),
        )
        .await
    {
        Ok(_) => redirect_saved("/categories"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_category_update(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Form(form): Form<CategoryForm>,
) -> Response {
    match state
        .categories
        .update(
            id,
            parse_kind(&form.kind),
            &form.name,
            form.description,
            form.sort_order.unwrap_or(0),
        )
        .await
    {
        Ok(_) => redirect_saved("/categories"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_category_delete(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.categories.delete(id).await {
        Ok(()) => redirect_saved("/categories"),
        Err(err) => err.into_response(),
    }
}
