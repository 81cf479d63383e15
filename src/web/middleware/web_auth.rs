//! Cookie-based route guard for the dashboard.

use axum::{
    extract::Request,
    middleware::Next,
    response::{Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

/// Name of the cookie holding the access token.
pub const TOKEN_COOKIE: &str = "token";

/// Lets a request through when a non-empty `token` cookie is present.
///
/// # Cookie Format
///
/// ```text
/// Cookie: token=<token>
/// ```
///
/// The token value is never checked here; the backend is the authority.
/// Anything else is redirected to `/login`, and the attempted path is not
/// remembered.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let protected = Router::new()
///     .route("/", get(dashboard_handler))
///     .route_layer(middleware::from_fn(web_auth::layer));
/// ```
pub async fn layer(jar: CookieJar, req: Request, next: Next) -> Result<Response, Redirect> {
    let authenticated = jar
        .get(TOKEN_COOKIE)
        .is_some_and(|cookie| !cookie.value().trim().is_empty());

    if authenticated {
        Ok(next.run(req).await)
    } else {
        tracing::debug!(path = %req.uri().path(), "No token cookie, redirecting to login");
        Err(Redirect::to("/login"))
    }
}
