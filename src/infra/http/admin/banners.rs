use axum::{
    Json,
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::repos::HeroBannerUpsertParams;
use crate::presentation::views::{AdminBannersTemplate, render_template_response};

use super::{
    AdminState,
    sections::ReorderPayload,
    shared::{SavedQuery, json_error, json_success, redirect_saved},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct BannerForm {
    page_id: Uuid,
    image_url: String,
    overlay_title: String,
    overlay_subtitle: String,
    overlay_position: String,
    sort_order: Option<i32>,
    is_active: Option<String>,
    alt_text: String,
    seo_title: String,
}

impl BannerForm {
    fn into_params(self) -> HeroBannerUpsertParams {
        HeroBannerUpsertParams {
            page_id: self.page_id,
            image_url: self.image_url,
            overlay_title: self.overlay_title,
            overlay_subtitle: self.overlay_subtitle,
            overlay_position: self.overlay_position,
            sort_order: self.sort_order.unwrap_or(0),
            is_active: self.is_active.is_some(),
            alt_text: self.alt_text,
            seo_title: self.seo_title,
        }
    }
}

pub(super) async fn admin_banners(
    State(state): State<AdminState>,
    Path(page_id): Path<Uuid>,
    Query(query): Query<SavedQuery>,
) -> Response {
    let page = match state.pages.get(page_id).await {
        Ok(page) => page,
        Err(err) => return err.into_response(),
    };
    match state.banners.list_for_page(page_id).await {
        Ok(banners) => render_template_response(
            AdminBannersTemplate {
                page,
                banners,
                saved: query.saved.is_some(),
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_banner_create(
    State(state): State<AdminState>,
    Form(form): Form<BannerForm>,
) -> Response {
    let page_id = form.page_id;
    match state.banners.create(form.into_params()).await {
        Ok(_) => redirect_saved(&format!("/pages/{page_id}/banners")),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_banner_update(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Form(form): Form<BannerForm>,
) -> Response {
    let page_id = form.page_id;
    match state.banners.update(id, form.into_params()).await {
        Ok(_) => redirect_saved(&format!("/pages/{page_id}/banners")),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_banner_delete(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.banners.delete(id).await {
        Ok(()) => redirect_saved("/pages"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_banners_reorder(
    State(state): State<AdminState>,
    Json(payload): Json<ReorderPayload>,
) -> Response {
    const SOURCE: &str = "infra::http::admin::banners::reorder";

    if payload.order.is_empty() {
        return json_error(SOURCE, StatusCode::BAD_REQUEST, "order must not be empty");
    }
    let ids: Vec<Uuid> = payload.into_ids();
    match state.banners.reorder(&ids).await {
        Ok(()) => json_success(),
        Err(err) => err.into_response(),
    }
}
