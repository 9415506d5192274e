use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::repos::{ClientLogoUpsertParams, NavLinkUpsertParams};
use crate::presentation::views::{AdminNavigationTemplate, render_template_response};

use super::{
    AdminState,
    shared::{SavedQuery, redirect_saved},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct NavLinkForm {
    label: String,
    url: String,
    parent_id: Option<Uuid>,
    sort_order: Option<i32>,
    is_visible: Option<String>,
    open_new_tab: Option<String>,
}

impl NavLinkForm {
    fn into_params(self) -> NavLinkUpsertParams {
        NavLinkUpsertParams {
            label: self.label,
            url: self.url,
            parent_id: self.parent_id,
            sort_order: self.sort_order.unwrap_or(0),
            is_visible: self.is_visible.is_some(),
            open_new_tab: self.open_new_tab.is_some(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogoForm {
    name: String,
    image_url: String,
    website_url: String,
    sort_order: Option<i32>,
    is_active: Option<String>,
}

impl LogoForm {
    fn into_params(self) -> ClientLogoUpsertParams {
        ClientLogoUpsertParams {
            name: self.name,
            image_url: self.image_url,
            website_url: self.website_url,
            sort_order: self.sort_order.unwrap_or(0),
            is_active: self.is_active.is_some(),
        }
    }
}

pub(super) async fn admin_navigation(
    State(state): State<AdminState>,
    Query(query): Query<SavedQuery>,
) -> Response {
    let links = match state.navigation.list_links().await {
        Ok(links) => links,
        Err(err) => return err.into_response(),
    };
    match state.navigation.list_logos().await {
        Ok(logos) => render_template_response(
            AdminNavigationTemplate {
                links,
                logos,
                saved: query.saved.is_some(),
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_nav_link_create(
    State(state): State<AdminState>,
    Form(form): Form<NavLinkForm>,
) -> Response {
    match state.navigation.create_link(form.into_params()).await {
        Ok(_) => redirect_saved("/navigation"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_nav_link_update(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Form(form): Form<NavLinkForm>,
) -> Response {
    match state.navigation.update_link(id, form.into_params()).await {
        Ok(_) => redirect_saved("/navigation"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_nav_link_delete(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.navigation.delete_link(id).await {
        Ok(()) => redirect_saved("/navigation"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_logo_create(
    State(state): State<AdminState>,
    Form(form): Form<LogoForm>,
) -> Response {
    match state.navigation.create_logo(form.into_params()).await {
        Ok(_) => redirect_saved("/navigation"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_logo_update(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Form(form): Form<LogoForm>,
) -> Response {
    match state.navigation.update_logo(id, form.into_params()).await {
        Ok(_) => redirect_saved("/navigation"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_logo_delete(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.navigation.delete_logo(id).await {
        Ok(()) => redirect_saved("/navigation"),
        Err(err) => err.into_response(),
    }
}
