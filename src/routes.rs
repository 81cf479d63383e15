//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/login`, `/logout` - Token form (public)
//! - `/`, `/subscribers/*`, `/newsletters/*` - Dashboard (token cookie required)
//! - `/static/*` - Stylesheet and the table loader script
//! - anything else - `404 Not Found` page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Route guard** - Redirects to `/login` without a token cookie
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::{tracing, web_auth};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with every route and middleware except path normalisation.
pub fn build_router(state: AppState) -> Router {
    let protected =
        web::routes::protected_routes().route_layer(middleware::from_fn(web_auth::layer));

    Router::new()
        .merge(protected)
        .merge(web::routes::public_routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
