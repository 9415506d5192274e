use axum::{
    Json,
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::presentation::views::{AdminHomeSectionsTemplate, render_template_response};

use super::{
    AdminState,
    sections::ReorderPayload,
    shared::{SavedQuery, json_error, json_success, redirect_saved},
};

pub(super) async fn admin_home_sections(
    State(state): State<AdminState>,
    Query(query): Query<SavedQuery>,
) -> Response {
    match state.home_sections.list().await {
        Ok(sections) => render_template_response(
            AdminHomeSectionsTemplate {
                sections,
                saved: query.saved.is_some(),
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

/// The home editor posts free-form `cfg_*` fields next to the fixed ones, so
/// the body is taken as raw pairs rather than a typed struct.
pub(super) async fn admin_home_update(
    State(state): State<AdminState>,
    Path(key): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let lookup = |name: &str| {
        fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.clone())
    };

    let label = lookup("label").unwrap_or_default();
    let heading = lookup("heading").unwrap_or_default();
    let subtitle = lookup("subtitle").unwrap_or_default();
    let is_visible = lookup("is_visible").is_some();
    let config_json = lookup("config_json");

    match state
        .home_sections
        .update(
            &key,
            label,
            heading,
            subtitle,
            is_visible,
            config_json.as_deref(),
            &fields,
        )
        .await
    {
        Ok(_) => redirect_saved("/home"),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_home_toggle(
    State(state): State<AdminState>,
    Path(key): Path<String>,
) -> Response {
    match state.home_sections.toggle(&key).await {
        Ok(visible) => Json(serde_json::json!({ "success": true, "visible": visible }))
            .into_response(),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_home_reorder(
    State(state): State<AdminState>,
    Json(payload): Json<ReorderPayload>,
) -> Response {
    const SOURCE: &str = "infra::http::admin::home::reorder";

    if payload.order.is_empty() {
        return json_error(SOURCE, StatusCode::BAD_REQUEST, "order must not be empty");
    }
    let ids: Vec<Uuid> = payload.into_ids();
    match state.home_sections.reorder(&ids).await {
        Ok(()) => json_success(),
        Err(err) => err.into_response(),
    }
}
