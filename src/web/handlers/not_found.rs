//! Fallback for unknown paths.

use crate::web::nav::Shell;
use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
};

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
    pub path: String,
}

/// Renders `404 Not Found` for any unmatched route.
pub async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            shell: Shell::new(uri.path(), None),
            path: uri.path().to_string(),
        },
    )
}
