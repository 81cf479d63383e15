//! Newsletters list, table fragment and the create/edit/delete dialogs.

use crate::application::dialog::{DialogState, FormOrigin};
use crate::application::filters::Period;
use crate::application::forms::NewsletterForm;
use crate::application::list_view::PageState;
use crate::domain::repositories::ImageUpload;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::{self, Notification};
use crate::web::nav::Shell;
use crate::web::params::NewsletterQuery;
use crate::web::views::{
    NewsletterRow, Pager, SelectOption, newsletter_path, period_filter_options,
    status_filter_options, status_options, type_filter_options, type_options,
};
use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, Query, State, multipart::MultipartError},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

const LIST_PATH: &str = "/newsletters";

/// Template for the newsletters page shell.
///
/// Renders `templates/newsletters.html` with the filter form and a
/// placeholder that loads `/newsletters/table`.
#[derive(Template, WebTemplate)]
#[template(path = "newsletters.html")]
pub struct NewslettersTemplate {
    pub shell: Shell,
    pub search: String,
    pub status_options: Vec<SelectOption>,
    pub type_options: Vec<SelectOption>,
    pub period_options: Vec<SelectOption>,
    pub table_href: String,
    pub new_href: String,
}

/// One filtered page of newsletters.
#[derive(Template, WebTemplate)]
#[template(path = "newsletters_table.html")]
pub struct NewslettersTableTemplate {
    pub rows: Vec<NewsletterRow>,
    pub pager: Pager,
    pub error: Option<Notification>,
}

/// Create or edit dialog.
#[derive(Template, WebTemplate)]
#[template(path = "newsletter_form.html")]
pub struct NewsletterFormTemplate {
    pub shell: Shell,
    pub heading: &'static str,
    pub action: String,
    pub cancel_href: String,
    pub submit_label: &'static str,
    pub form: NewsletterForm,
    pub status_options: Vec<SelectOption>,
    pub type_options: Vec<SelectOption>,
    pub error: Option<String>,
}

impl NewsletterFormTemplate {
    fn render(
        dialog: &DialogState<NewsletterForm>,
        action: String,
        list: &NewsletterQuery,
        notification: Option<Notification>,
    ) -> Self {
        let prefilled = matches!(
            dialog,
            DialogState::Open {
                origin: FormOrigin::Prefilled,
                ..
            }
        );
        let form = dialog.form().cloned().unwrap_or_default();

        Self {
            shell: Shell::new(LIST_PATH, notification),
            heading: if prefilled {
                "Update Newsletter"
            } else {
                "Create New Newsletter"
            },
            submit_label: if prefilled {
                "Update Newsletter"
            } else {
                "Create Newsletter"
            },
            action,
            cancel_href: list_href(list),
            status_options: status_options(&form.status),
            type_options: type_options(&form.kind),
            error: dialog.error().map(str::to_string),
            form,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "newsletter_delete.html")]
pub struct NewsletterDeleteTemplate {
    pub shell: Shell,
    pub title: String,
    pub action: String,
    pub cancel_href: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    pub title: Option<String>,
}

/// The list page a dialog returns to, with the page and filters it was opened from.
fn list_href(list: &NewsletterQuery) -> String {
    format!("{LIST_PATH}?{}", list.current())
}

fn with_list(path: String, list: &NewsletterQuery) -> String {
    format!("{path}?{}", list.current())
}

/// Renders the newsletters page with its filter form.
///
/// # Endpoint
///
/// `GET /newsletters?page=&search=&status=&type=&period=`
pub async fn newsletters_handler(
    jar: CookieJar,
    Query(query): Query<NewsletterQuery>,
) -> impl IntoResponse {
    let (jar, notification) = flash::take(jar);

    let page = NewslettersTemplate {
        shell: Shell::new(LIST_PATH, notification),
        search: query.search.clone(),
        status_options: status_filter_options(query.status.as_deref().unwrap_or_default()),
        type_options: type_filter_options(query.kind.as_deref().unwrap_or_default()),
        period_options: period_filter_options(Period::parse(query.period.as_deref())),
        table_href: format!("{LIST_PATH}/table?{}", query.current()),
        new_href: with_list(format!("{LIST_PATH}/new"), &query),
    };

    (jar, page)
}

/// Renders one filtered page of newsletters.
///
/// # Endpoint
///
/// `GET /newsletters/table?page=&search=&status=&type=&period=`
///
/// Filters narrow the loaded page only. A failed fetch renders an error
/// notice above an empty table.
pub async fn newsletters_table_handler(
    State(st): State<AppState>,
    Query(query): Query<NewsletterQuery>,
) -> impl IntoResponse {
    let page = query.page();
    let href = |p: u32| format!("{LIST_PATH}?{}", query.query_string(p));
    let origin = query.current();

    match st.newsletter_service.list_page(page).await {
        Ok(view) => {
            let view = view.filtered(&query.filter(Utc::now()));
            NewslettersTableTemplate {
                rows: view
                    .rows
                    .iter()
                    .map(|newsletter| NewsletterRow::from(newsletter).returning_to(&origin))
                    .collect(),
                pager: Pager::new(view.page, href),
                error: None,
            }
        }
        Err(err) => {
            tracing::error!(error = %err, page, "Failed to fetch newsletters");
            NewslettersTableTemplate {
                rows: Vec::new(),
                pager: Pager::new(PageState::new(page, 1), href),
                error: Some(Notification::error(
                    "Failed to Fetch Newsletters",
                    err.user_message(),
                )),
            }
        }
    }
}

/// Opens the create dialog with an empty form.
///
/// # Endpoint
///
/// `GET /newsletters/new?page=&search=&status=&type=&period=`
pub async fn new_newsletter_handler(Query(list): Query<NewsletterQuery>) -> impl IntoResponse {
    NewsletterFormTemplate::render(
        &DialogState::open_empty(),
        list_href(&list),
        &list,
        None,
    )
}

/// Submits the create dialog.
///
/// # Endpoint
///
/// `POST /newsletters?page=..` (multipart). The query string is the list
/// state to return to.
pub async fn create_newsletter_handler(
    State(st): State<AppState>,
    jar: CookieJar,
    Query(list): Query<NewsletterQuery>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (form, image) = read_newsletter_form(multipart).await?;
    let service = &st.newsletter_service;

    let (dialog, saved) = DialogState::reopen(form, FormOrigin::Empty)
        .submit()
        .run(|form| service.create(form, image))
        .await;

    Ok(match saved {
        Some(saved) => {
            let notification = Notification::success(
                "Newsletter Created",
                saved
                    .message
                    .unwrap_or_else(|| "Your newsletter has been created.".to_string()),
            );
            (flash::push(jar, notification), Redirect::to(&list_href(&list))).into_response()
        }
        None => {
            let message = dialog.error().unwrap_or_default().to_string();
            tracing::warn!(error = %message, "Newsletter creation failed");
            NewsletterFormTemplate::render(
                &dialog,
                list_href(&list),
                &list,
                Some(Notification::error("Create Failed", message)),
            )
            .into_response()
        }
    })
}

/// Opens the edit dialog pre-filled from the backend.
///
/// # Endpoint
///
/// `GET /newsletters/{id}/edit?page=..`
///
/// Issues exactly one fetch. On failure the user is sent back to the list
/// with a notification.
pub async fn edit_newsletter_handler(
    State(st): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    Query(list): Query<NewsletterQuery>,
) -> Response {
    match st.newsletter_service.edit_form(&id).await {
        Ok(form) => {
            let (jar, notification) = flash::take(jar);
            let dialog = DialogState::open_prefilled(form);
            (
                jar,
                NewsletterFormTemplate::render(
                    &dialog,
                    with_list(newsletter_path(&id), &list),
                    &list,
                    notification,
                ),
            )
                .into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, id = %id, "Failed to fetch newsletter for editing");
            let notification = Notification::error("Failed to fetch newsletter", err.user_message());
            (flash::push(jar, notification), Redirect::to(&list_href(&list))).into_response()
        }
    }
}

/// Submits the edit dialog.
///
/// # Endpoint
///
/// `POST /newsletters/{id}?page=..` (multipart), sent to the backend as `PUT`.
pub async fn update_newsletter_handler(
    State(st): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    Query(list): Query<NewsletterQuery>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (form, image) = read_newsletter_form(multipart).await?;
    let service = &st.newsletter_service;

    let (dialog, saved) = DialogState::reopen(form, FormOrigin::Prefilled)
        .submit()
        .run(|form| service.update(&id, form, image))
        .await;

    Ok(match saved {
        Some(saved) => {
            let notification = Notification::success(
                "Newsletter Updated",
                saved
                    .message
                    .unwrap_or_else(|| "Your newsletter has been updated.".to_string()),
            );
            (flash::push(jar, notification), Redirect::to(&list_href(&list))).into_response()
        }
        None => {
            let message = dialog.error().unwrap_or_default().to_string();
            tracing::warn!(error = %message, id = %id, "Newsletter update failed");
            NewsletterFormTemplate::render(
                &dialog,
                with_list(newsletter_path(&id), &list),
                &list,
                Some(Notification::error("Update Failed", message)),
            )
            .into_response()
        }
    })
}

/// Asks for confirmation before deleting. Issues no backend request.
///
/// # Endpoint
///
/// `GET /newsletters/{id}/delete?title=&page=..`
pub async fn confirm_delete_handler(
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
    Query(list): Query<NewsletterQuery>,
) -> impl IntoResponse {
    NewsletterDeleteTemplate {
        shell: Shell::new(LIST_PATH, None),
        title: query
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "this newsletter".to_string()),
        action: with_list(format!("{}/delete", newsletter_path(&id)), &list),
        cancel_href: list_href(&list),
    }
}

/// Deletes a newsletter and returns to the list.
///
/// # Endpoint
///
/// `POST /newsletters/{id}/delete?page=..`
///
/// Returns to the page and filters the delete was started from; that page
/// is re-fetched without the removed record.
pub async fn delete_newsletter_handler(
    State(st): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    Query(list): Query<NewsletterQuery>,
) -> impl IntoResponse {
    let notification = match st.newsletter_service.delete(&id).await {
        Ok(()) => Notification::success(
            "Newsletter Deleted",
            "The newsletter has been removed successfully.",
        ),
        Err(err) => {
            tracing::warn!(error = %err, id = %id, "Newsletter deletion failed");
            Notification::error("Delete Failed", err.user_message())
        }
    };

    (flash::push(jar, notification), Redirect::to(&list_href(&list)))
}

fn invalid_submission(err: MultipartError) -> AppError {
    AppError::bad_request(
        "Invalid form submission",
        json!({ "reason": err.body_text() }),
    )
}

/// Reads the dialog fields and the optional `featuredImage` file.
///
/// Fields that are absent keep their defaults; an empty file input yields
/// no upload.
async fn read_newsletter_form(
    mut multipart: Multipart,
) -> Result<(NewsletterForm, Option<ImageUpload>), AppError> {
    let mut form = NewsletterForm::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_submission)? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "featuredImage" {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(invalid_submission)?;
            if !bytes.is_empty() {
                image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field.text().await.map_err(invalid_submission)?;
        match name.as_str() {
            "title" => form.title = value,
            "subtitle" => form.subtitle = value,
            "content" => form.content = value,
            "type" => form.kind = value,
            "status" => form.status = value,
            "featured_image" => form.featured_image = value,
            _ => {}
        }
    }

    Ok((form, image))
}
