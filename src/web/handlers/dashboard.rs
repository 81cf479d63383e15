//! Dashboard home page handler.

use crate::state::AppState;
use crate::web::flash;
use crate::web::nav::Shell;
use crate::web::views::{NewsletterRow, SubscriberRow, format_count};
use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with:
/// - Total subscribers and newsletters
/// - The five most recent subscribers and newsletters
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub shell: Shell,
    pub total_subscribers: String,
    pub total_newsletters: String,
    pub recent_subscribers: Vec<SubscriberRow>,
    pub recent_newsletters: Vec<NewsletterRow>,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Both resources are fetched concurrently; a failing side renders as empty.
pub async fn dashboard_handler(State(st): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, notification) = flash::take(jar);
    let summary = st.dashboard_service.summary().await;

    let page = DashboardTemplate {
        shell: Shell::new("/", notification),
        total_subscribers: format_count(summary.total_subscribers),
        total_newsletters: format_count(summary.total_newsletters),
        recent_subscribers: summary.recent_subscribers.iter().map(SubscriberRow::from).collect(),
        recent_newsletters: summary.recent_newsletters.iter().map(NewsletterRow::from).collect(),
    };

    (jar, page)
}
