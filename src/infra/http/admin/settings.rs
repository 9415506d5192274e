use axum::{
    extract::{Form, Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::infra::http::repo_error_to_http;
use crate::presentation::views::{AdminSettingsTemplate, render_template_response};

use super::{
    AdminState,
    shared::{SavedQuery, json_error, redirect_saved},
};

const SOURCE_BASE: &str = "infra::http::admin::settings";

pub(super) async fn admin_settings(
    State(state): State<AdminState>,
    Query(query): Query<SavedQuery>,
) -> Response {
    match state.settings.get().await {
        Ok(map) => {
            let mut entries: Vec<(String, String)> = map
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            render_template_response(
                AdminSettingsTemplate {
                    entries,
                    saved: query.saved.is_some(),
                },
                StatusCode::OK,
            )
        }
        Err(err) => repo_error_to_http(SOURCE_BASE, err).into_response(),
    }
}

/// Every posted pair is upserted as a setting; unknown keys are allowed so
/// templates can grow new knobs without a schema change.
pub(super) async fn admin_settings_update(
    State(state): State<AdminState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    if fields.is_empty() {
        return json_error(
            SOURCE_BASE,
            StatusCode::BAD_REQUEST,
            "no settings submitted",
        );
    }
    match state.settings.save(&fields).await {
        Ok(()) => redirect_saved("/settings"),
        Err(err) => repo_error_to_http(SOURCE_BASE, err).into_response(),
    }
}

/// Branding assets (logo, favicon) are ordinary uploads whose public URL is
/// written straight into settings under `{part}_url`.
pub(super) async fn admin_branding_upload(
    State(state): State<AdminState>,
    mut multipart: Multipart,
) -> Response {
    let mut entries: Vec<(String, String)> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                return json_error(SOURCE_BASE, StatusCode::BAD_REQUEST, err.to_string());
            }
        };

        let Some(name) = field.name() else { continue };
        if name != "logo" && name != "favicon" {
            continue;
        }
        let key = format!("{name}_url");
        let original = field.file_name().unwrap_or("branding").to_string();
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(err) => {
                return json_error(SOURCE_BASE, StatusCode::BAD_REQUEST, err.to_string());
            }
        };
        match state.upload_storage.store(&original, data).await {
            Ok(upload) => entries.push((key, format!("/uploads/{}", upload.filename))),
            Err(err) => {
                return json_error(SOURCE_BASE, StatusCode::BAD_REQUEST, err.to_string());
            }
        }
    }

    if entries.is_empty() {
        return json_error(
            SOURCE_BASE,
            StatusCode::BAD_REQUEST,
            "no branding file supplied",
        );
    }
    match state.settings.save(&entries).await {
        Ok(()) => redirect_saved("/settings"),
        Err(err) => repo_error_to_http(SOURCE_BASE, err).into_response(),
    }
}
