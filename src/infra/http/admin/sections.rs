use axum::{
    Json,
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::admin::sections::SectionExtras;
use crate::application::repos::SectionUpsertParams;

use super::{
    AdminState,
    shared::{json_error, json_success, redirect_saved},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct SectionForm {
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
    sort_order: Option<i32>,
    extra_json: String,
    youtube_url: Option<String>,
    is_featured_home: Option<String>,
}

impl SectionForm {
    fn into_parts(self, page_id: Uuid) -> (SectionUpsertParams, SectionExtras) {
        let extras = SectionExtras {
            youtube_url: self.youtube_url,
            featured_home_checkbox: self.is_featured_home,
        };
        let params = SectionUpsertParams {
            page_id,
            kind: self.kind,
            title: self.title,
            description: self.description,
            content_html: self.content_html,
            image_url: self.image_url,
            video_url: self.video_url,
            icon: self.icon,
            icon_type: self.icon_type,
            icon_image_url: self.icon_image_url,
            tag: self.tag,
            sort_order: self.sort_order.unwrap_or(0),
            extra_json: self.extra_json,
        };
        (params, extras)
    }
}

pub(super) async fn admin_section_create(
    State(state): State<AdminState>,
    Path(page_id): Path<Uuid>,
    Form(form): Form<SectionForm>,
) -> Response {
    let (params, extras) = form.into_parts(page_id);
    match state.sections.create(params, extras).await {
        Ok(_) => redirect_saved(&format!("/pages/{page_id}/edit")),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_section_update(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Form(form): Form<SectionForm>,
) -> Response {
    let current = match state.sections.get(id).await {
        Ok(section) => section,
        Err(err) => return err.into_response(),
    };
    let (params, extras) = form.into_parts(current.page_id);
    match state.sections.update(id, params, extras).await {
        Ok(section) => redirect_saved(&format!("/pages/{}/edit", section.page_id)),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_section_delete(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    let current = match state.sections.get(id).await {
        Ok(section) => section,
        Err(err) => return err.into_response(),
    };
    match state.sections.delete(id).await {
        Ok(()) => redirect_saved(&format!("/pages/{}/edit", current.page_id)),
        Err(err) => err.into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ReorderEntry {
    pub id: Uuid,
    pub sort_order: i32,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReorderPayload {
    pub order: Vec<ReorderEntry>,
}

impl ReorderPayload {
    /// Ranks win over submission order; ties keep submission order.
    pub fn into_ids(mut self) -> Vec<Uuid> {
        self.order.sort_by_key(|entry| entry.sort_order);
        self.order.into_iter().map(|entry| entry.id).collect()
    }
}

pub(super) async fn admin_sections_reorder(
    State(state): State<AdminState>,
    Json(payload): Json<ReorderPayload>,
) -> Response {
    const SOURCE: &str = "infra::http::admin::sections::reorder";

    if payload.order.is_empty() {
        return json_error(SOURCE, StatusCode::BAD_REQUEST, "order must not be empty");
    }
    match state.sections.reorder(&payload.into_ids()).await {
        Ok(()) => json_success(),
        Err(err) => err.into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct FeaturePayload {
    featured: bool,
}

pub(super) async fn admin_section_feature(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FeaturePayload>,
) -> Response {
    match state.sections.set_featured_home(id, payload.featured).await {
        Ok(()) => json_success(),
        Err(err) => err.into_response(),
    }
}
