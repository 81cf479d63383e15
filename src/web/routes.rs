//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    confirm_delete_handler, create_newsletter_handler, create_subscriber_handler,
    dashboard_handler, delete_newsletter_handler, edit_newsletter_handler, login_handler,
    login_submit_handler, logout_handler, new_newsletter_handler, new_subscriber_handler,
    newsletters_handler, newsletters_table_handler, subscribers_handler,
    subscribers_table_handler, update_newsletter_handler,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Largest accepted newsletter form, image included.
pub const UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Dashboard routes requiring the `token` cookie.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET  /` - Dashboard summary
/// - `GET  /subscribers` - Subscribers page (`/table` serves the rows)
/// - `GET  /subscribers/new`, `POST /subscribers` - "Add user" dialog
/// - `GET  /newsletters` - Newsletters page (`/table` serves the rows)
/// - `GET  /newsletters/new`, `POST /newsletters` - Create dialog
/// - `GET  /newsletters/{id}/edit`, `POST /newsletters/{id}` - Edit dialog
/// - `GET|POST /newsletters/{id}/delete` - Delete confirmation
pub fn protected_routes() -> Router<AppState> {
    let newsletters = Router::new()
        .route(
            "/newsletters",
            get(newsletters_handler).post(create_newsletter_handler),
        )
        .route("/newsletters/table", get(newsletters_table_handler))
        .route("/newsletters/new", get(new_newsletter_handler))
        .route("/newsletters/{id}", post(update_newsletter_handler))
        .route("/newsletters/{id}/edit", get(edit_newsletter_handler))
        .route(
            "/newsletters/{id}/delete",
            get(confirm_delete_handler).post(delete_newsletter_handler),
        )
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    Router::new()
        .route("/", get(dashboard_handler))
        .route(
            "/subscribers",
            get(subscribers_handler).post(create_subscriber_handler),
        )
        .route("/subscribers/table", get(subscribers_table_handler))
        .route("/subscribers/new", get(new_subscriber_handler))
        .merge(newsletters)
}

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `GET|POST /login` - Token form
/// - `POST /logout` - Clears the token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_handler).post(login_submit_handler))
        .route("/logout", post(logout_handler))
}
