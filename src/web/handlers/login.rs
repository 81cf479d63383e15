//! Login and logout handlers.

use crate::state::AppState;
use crate::web::middleware::web_auth::TOKEN_COOKIE;
use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

/// Template for the login page.
///
/// Renders `templates/login.html` with the token form and an optional error.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub token: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Stores the access token and continues to the dashboard.
///
/// # Endpoint
///
/// `POST /login`
///
/// The token is kept as entered; an empty token re-renders the form.
pub async fn login_submit_handler(
    State(st): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let token = form.token.trim().to_string();
    if token.is_empty() {
        return LoginTemplate {
            error: Some("Please enter your access token".to_string()),
        }
        .into_response();
    }

    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(st.secure_cookies);

    tracing::info!("Dashboard session started");
    (jar.add(cookie), Redirect::to("/")).into_response()
}

/// Drops the token cookie.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout_handler(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/"));
    (jar, Redirect::to("/login"))
}
