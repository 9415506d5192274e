use axum::{
    Json,
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::repos::{PageMetaParams, PageUpsertParams};
use crate::domain::types::PageTemplate as PageTemplateKind;
use crate::presentation::views::{
    AdminBuilderTemplate, AdminPageFormTemplate, AdminPagesTemplate, LayoutChrome, PageTemplate,
    render_template_response,
};

use super::{
    AdminState,
    shared::{SavedQuery, json_error, json_success, redirect_saved},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct PageForm {
    slug: String,
    title: String,
    meta_description: String,
    hero_title: String,
    hero_subtitle: String,
    hero_label: String,
    nav_order: Option<i32>,
    is_visible: Option<String>,
    template: String,
    schema_type: String,
    schema_json: String,
    faq_json: String,
}

impl PageForm {
    fn into_create_params(self) -> PageUpsertParams {
        PageUpsertParams {
            slug: self.slug,
            title: self.title,
            meta_description: self.meta_description,
            hero_title: self.hero_title,
            hero_subtitle: self.hero_subtitle,
            hero_label: self.hero_label,
            nav_order: self.nav_order.unwrap_or(0),
            is_visible: self.is_visible.is_some(),
            template: PageTemplateKind::parse(&self.template),
            schema_type: self.schema_type,
            schema_json: self.schema_json,
            faq_json: self.faq_json,
            page_blocks: String::new(),
        }
    }

    /// Edit saves carry metadata only; the posted slug is ignored and the
    /// builder block list is untouched.
    fn into_meta_params(self) -> PageMetaParams {
        PageMetaParams {
            title: self.title,
            meta_description: self.meta_description,
            hero_title: self.hero_title,
            hero_subtitle: self.hero_subtitle,
            hero_label: self.hero_label,
            nav_order: self.nav_order.unwrap_or(0),
            is_visible: self.is_visible.is_some(),
            template: PageTemplateKind::parse(&self.template),
            schema_type: self.schema_type,
            schema_json: self.schema_json,
            faq_json: self.faq_json,
        }
    }
}

pub(super) async fn admin_pages(
    State(state): State<AdminState>,
    Query(query): Query<SavedQuery>,
) -> Response {
    match state.pages.list().await {
        Ok(pages) => render_template_response(
            AdminPagesTemplate {
                pages,
                saved: query.saved.is_some(),
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_page_new() -> Response {
    render_template_response(
        AdminPageFormTemplate {
            page: None,
            saved: false,
        },
        StatusCode::OK,
    )
}

pub(super) async fn admin_page_create(
    State(state): State<AdminState>,
    Form(form): Form<PageForm>,
) -> Response {
    match state.pages.create(form.into_create_params()).await {
        Ok(page) => redirect_saved(&format!("/pages/{}/edit", page.id)),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_page_edit(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Query(query): Query<SavedQuery>,
) -> Response {
    match state.pages.get(id).await {
        Ok(page) => render_template_response(
            AdminPageFormTemplate {
                page: Some(page),
                saved: query.saved.is_some(),
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_page_update(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Form(form): Form<PageForm>,
) -> Response {
    match state.pages.update(id, form.into_meta_params()).await {
        Ok(_) => redirect_saved(&format!("/pages/{id}/edit")),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_page_delete(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.pages.delete(id).await {
        Ok(()) => redirect_saved("/pages"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_page_duplicate(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.pages.duplicate(id).await {
        Ok(copy) => redirect_saved(&format!("/pages/{}/edit", copy.id)),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_page_builder(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.pages.get(id).await {
        Ok(page) => render_template_response(AdminBuilderTemplate { page }, StatusCode::OK),
        Err(err) => err.into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct BlocksPayload {
    blocks: serde_json::Value,
}

pub(super) async fn admin_page_save_blocks(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BlocksPayload>,
) -> Response {
    const SOURCE: &str = "infra::http::admin::pages::save_blocks";

    if !payload.blocks.is_array() {
        return json_error(SOURCE, StatusCode::BAD_REQUEST, "blocks must be an array");
    }
    let raw = payload.blocks.to_string();
    match state.pages.save_blocks(id, &raw).await {
        Ok(()) => json_success(),
        Err(err) => err.into_response(),
    }
}

/// Render a page exactly as the public site would, visibility ignored, so
/// drafts can be checked before they go live.
pub(super) async fn admin_page_preview(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    let page = match state.pages.get(id).await {
        Ok(page) => page,
        Err(err) => return err.into_response(),
    };

    if page.template.is_blog() {
        return Redirect::to("/posts").into_response();
    }

    let chrome = match state.chrome.load().await {
        Ok(chrome) => chrome,
        Err(err) => return err.into_response(),
    };
    let chrome = LayoutChrome::from_chrome(chrome, "");

    match state.resolver.compose(page).await {
        Ok(context) => {
            let chrome = chrome.with_meta(
                &context.page.title,
                &context.page.meta_description,
                &format!("/{}", context.page.slug),
                context.og_video.clone(),
            );
            render_template_response(PageTemplate { chrome, context }, StatusCode::OK)
        }
        Err(err) => err.into_response(),
    }
}
