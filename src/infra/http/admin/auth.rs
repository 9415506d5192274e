use axum::{
    body::Body,
    extract::{Form, Query, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::info;

use crate::infra::http::session::SESSION_COOKIE;
use crate::presentation::views::{AdminLoginTemplate, render_template_response};

use super::{AdminState, shared::AdminIdentity};

/// Gate for everything behind the login form. Requests without a valid
/// session cookie are bounced to `/login`.
pub async fn require_session(
    State(state): State<AdminState>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let username = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.verify(cookie.value()));

    match username {
        Some(username) => {
            request.extensions_mut().insert(AdminIdentity { username });
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoginQuery {
    error: Option<String>,
}

pub(super) async fn login_form(
    State(state): State<AdminState>,
    jar: CookieJar,
    Query(query): Query<LoginQuery>,
) -> Response {
    let already_signed_in = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.verify(cookie.value()))
        .is_some();
    if already_signed_in {
        return Redirect::to("/").into_response();
    }

    render_template_response(
        AdminLoginTemplate {
            error: query.error.is_some(),
        },
        StatusCode::OK,
    )
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginForm {
    username: String,
    password: String,
}

pub(super) async fn login_submit(
    State(state): State<AdminState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.auth.verify_login(&form.username, &form.password).await {
        Ok(Some(user)) => {
            info!(
                target = "vetrina::http::admin::auth",
                username = %user.username,
                "admin signed in"
            );
            let cookie = session_cookie(state.sessions.issue(&user.username));
            (jar.add(cookie), Redirect::to("/")).into_response()
        }
        Ok(None) => Redirect::to("/login?error=1").into_response(),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn logout(jar: CookieJar) -> Response {
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(removal), Redirect::to("/login")).into_response()
}

#[derive(Debug, Deserialize)]
pub(super) struct PasswordForm {
    current_password: String,
    new_password: String,
    confirm_password: String,
}

pub(super) async fn change_password(
    State(state): State<AdminState>,
    axum::Extension(identity): axum::Extension<AdminIdentity>,
    Form(form): Form<PasswordForm>,
) -> Response {
    match state
        .auth
        .change_password(
            &identity.username,
            &form.current_password,
            &form.new_password,
            &form.confirm_password,
        )
        .await
    {
        Ok(()) => super::shared::redirect_saved("/settings"),
        Err(err) => err.into_response(),
    }
}

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
