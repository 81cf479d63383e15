//! Subscribers list, table fragment and "add user" dialog.

use crate::application::dialog::{DialogState, FormOrigin};
use crate::application::forms::SubscriberForm;
use crate::application::list_view::PageState;
use crate::state::AppState;
use crate::web::flash::{self, Notification};
use crate::web::nav::Shell;
use crate::web::params::SubscriberQuery;
use crate::web::views::{
    Pager, SelectOption, SubscriberRow, subscriber_filter_options, subscriber_status_options,
};
use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

/// Template for the subscribers page shell.
///
/// The table itself is loaded from `/subscribers/table`.
#[derive(Template, WebTemplate)]
#[template(path = "subscribers.html")]
pub struct SubscribersTemplate {
    pub shell: Shell,
    pub search: String,
    pub status_options: Vec<SelectOption>,
    pub table_href: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "subscribers_table.html")]
pub struct SubscribersTableTemplate {
    pub rows: Vec<SubscriberRow>,
    pub pager: Pager,
    pub error: Option<Notification>,
}

#[derive(Template, WebTemplate)]
#[template(path = "subscriber_form.html")]
pub struct SubscriberFormTemplate {
    pub shell: Shell,
    pub form: SubscriberForm,
    pub status_options: Vec<SelectOption>,
    pub error: Option<String>,
}

impl SubscriberFormTemplate {
    fn render(dialog: &DialogState<SubscriberForm>, notification: Option<Notification>) -> Self {
        let form = dialog.form().cloned().unwrap_or_default();
        Self {
            shell: Shell::new("/subscribers", notification),
            status_options: subscriber_status_options(&form.status),
            error: dialog.error().map(str::to_string),
            form,
        }
    }
}

/// Renders the subscribers page with its filter form.
///
/// # Endpoint
///
/// `GET /subscribers?page=&search=&status=`
pub async fn subscribers_handler(
    jar: CookieJar,
    Query(query): Query<SubscriberQuery>,
) -> impl IntoResponse {
    let (jar, notification) = flash::take(jar);

    let page = SubscribersTemplate {
        shell: Shell::new("/subscribers", notification),
        search: query.search.clone(),
        status_options: subscriber_filter_options(query.status.as_deref().unwrap_or_default()),
        table_href: format!("/subscribers/table?{}", query.query_string(query.page())),
    };

    (jar, page)
}

/// Renders one filtered page of subscribers.
///
/// # Endpoint
///
/// `GET /subscribers/table?page=&search=&status=`
pub async fn subscribers_table_handler(
    State(st): State<AppState>,
    Query(query): Query<SubscriberQuery>,
) -> impl IntoResponse {
    let page = query.page();
    let href = |p: u32| format!("/subscribers?{}", query.query_string(p));

    match st.subscriber_service.list_page(page).await {
        Ok(view) => {
            let view = view.filtered(&query.filter());
            SubscribersTableTemplate {
                rows: view.rows.iter().map(SubscriberRow::from).collect(),
                pager: Pager::new(view.page, href),
                error: None,
            }
        }
        Err(err) => {
            tracing::error!(error = %err, page, "Failed to fetch subscribers");
            SubscribersTableTemplate {
                rows: Vec::new(),
                pager: Pager::new(PageState::new(page, 1), href),
                error: Some(Notification::error(
                    "Failed to Fetch Subscribers",
                    err.user_message(),
                )),
            }
        }
    }
}

/// Opens the "add user" dialog with an empty form.
///
/// # Endpoint
///
/// `GET /subscribers/new`
pub async fn new_subscriber_handler() -> impl IntoResponse {
    SubscriberFormTemplate::render(&DialogState::open_empty(), None)
}

/// Submits the "add user" dialog.
///
/// # Endpoint
///
/// `POST /subscribers`
pub async fn create_subscriber_handler(
    State(st): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SubscriberForm>,
) -> Response {
    let service = &st.subscriber_service;
    let (dialog, saved) = DialogState::reopen(form.clone(), FormOrigin::Empty)
        .submit()
        .run(|form| service.create(form))
        .await;

    if saved.is_some() {
        let notification = Notification::success(
            "User created successfully!",
            format!("{} has been added to your subscribers.", form.name.trim()),
        );
        return (flash::push(jar, notification), Redirect::to("/subscribers")).into_response();
    }

    let message = dialog.error().unwrap_or_default().to_string();
    tracing::warn!(error = %message, "Subscriber creation failed");
    SubscriberFormTemplate::render(
        &dialog,
        Some(Notification::error("Failed to create user", message)),
    )
    .into_response()
}
