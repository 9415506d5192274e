use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::application::error::ErrorReport;

/// `?saved=1` flag appended by redirects after successful form saves.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SavedQuery {
    pub saved: Option<String>,
}

/// Authenticated admin attached to the request by the session middleware.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub username: String,
}

pub fn redirect_saved(path: &str) -> Response {
    let separator = if path.contains('?') { '&' } else { '?' };
    Redirect::to(&format!("{path}{separator}saved=1")).into_response()
}

pub fn json_success() -> Response {
    Json(json!({ "success": true })).into_response()
}

/// Success envelope with extra fields merged beside `success: true`.
pub fn json_success_with(extra: serde_json::Value) -> Response {
    let mut body = json!({ "success": true });
    if let (Some(target), Some(source)) = (body.as_object_mut(), extra.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    Json(body).into_response()
}

pub fn json_error(source: &'static str, status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    let mut response = (status, Json(json!({ "error": message }))).into_response();
    ErrorReport::from_message(source, status, message).attach(&mut response);
    response
}
