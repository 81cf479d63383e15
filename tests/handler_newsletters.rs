mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_newsletter_page(backend: &MockServer, page: u32, pages: u32) {
    let items = vec![
        common::newsletter_json("n1", "Spring Gala", "draft", "general", "2024-04-02T10:00:00Z"),
        common::newsletter_json("n2", "Press Kit", "published", "press", "2024-03-15T10:00:00Z"),
        common::newsletter_json("n3", "Summer Photos", "scheduled", "photos", "2024-02-01T10:00:00Z"),
    ];

    Mock::given(method("GET"))
        .and(path("/newsletters"))
        .and(query_param("page", page.to_string()))
        .and(query_param("limit", common::PAGE_SIZE.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::list_body(items, pages, 25)))
        .expect(1)
        .mount(backend)
        .await;
}

fn newsletter_form(title: &str, content: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title.to_string())
        .add_text("subtitle", "A night to remember")
        .add_text("content", content.to_string())
        .add_text("type", "general")
        .add_text("status", "draft")
        .add_text("featured_image", "")
}

// ─── TABLE ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_table_renders_loaded_page() {
    let backend = MockServer::start().await;
    mount_newsletter_page(&backend, 1, 3).await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .get("/newsletters/table")
        .add_header("Cookie", common::AUTH)
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Newsletters (3)"));
    assert!(body.contains("Spring Gala"));
    assert!(body.contains("Press Kit"));
    assert!(body.contains("Page 1 of 3"));
    assert!(body.contains("<span class=\"button disabled\" aria-disabled=\"true\">Previous</span>"));
    assert!(body.contains(">Next</a>"));
}

#[tokio::test]
async fn test_table_last_page_disables_next() {
    let backend = MockServer::start().await;
    mount_newsletter_page(&backend, 3, 3).await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .get("/newsletters/table?page=3")
        .add_header("Cookie", common::AUTH)
        .await;

    let body = response.text();
    assert!(body.contains("Page 3 of 3"));
    assert!(body.contains(">Previous</a>"));
    assert!(body.contains("<span class=\"button disabled\" aria-disabled=\"true\">Next</span>"));
}

#[tokio::test]
async fn test_table_filters_within_loaded_page() {
    let backend = MockServer::start().await;
    mount_newsletter_page(&backend, 1, 3).await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .get("/newsletters/table?search=PRESS&status=published&type=all")
        .add_header("Cookie", common::AUTH)
        .await;

    let body = response.text();
    assert!(body.contains("Newsletters (1)"));
    assert!(body.contains("Press Kit"));
    assert!(!body.contains("Spring Gala"));
    // Pagination still reflects the backend's page count.
    assert!(body.contains("Page 1 of 3"));
}

#[tokio::test]
async fn test_table_filter_without_matches_shows_empty_state() {
    let backend = MockServer::start().await;
    mount_newsletter_page(&backend, 1, 1).await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .get("/newsletters/table?type=videos")
        .add_header("Cookie", common::AUTH)
        .await;

    let body = response.text();
    assert!(body.contains("Newsletters (0)"));
    assert!(body.contains("No newsletters found matching your criteria."));
}

#[tokio::test]
async fn test_table_fetch_failure_shows_notice() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/newsletters"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "Database offline" })))
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .get("/newsletters/table")
        .add_header("Cookie", common::AUTH)
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Failed to Fetch Newsletters"));
    assert!(body.contains("Database offline"));
    assert!(body.contains("Newsletters (0)"));
}

#[tokio::test]
async fn test_list_page_points_table_at_current_filters() {
    let backend = MockServer::start().await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .get("/newsletters?page=2&status=draft")
        .add_header("Cookie", common::AUTH)
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Loading newsletters..."));
    assert!(body.contains("/newsletters/table?page=2"));
    assert!(body.contains("status=draft"));
    // The shell does not fetch; the table fragment does.
    assert!(backend.received_requests().await.unwrap().is_empty());
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_issues_one_request_and_flashes() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/newsletters"))
        .and(body_partial_json(json!({
            "title": "Spring Gala",
            "subTitle": "A night to remember",
            "type": "general",
            "status": "draft"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Newsletter saved",
            "data": common::newsletter_json("n9", "Spring Gala", "draft", "general", "2024-04-02T10:00:00Z")
        })))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .post("/newsletters")
        .add_header("Cookie", common::AUTH)
        .multipart(newsletter_form("Spring Gala", "<p>Join us</p>"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/newsletters?page=1");

    let list = server
        .get("/newsletters")
        .add_header("Cookie", common::with_flash(&response))
        .await;
    let body = list.text();
    assert!(body.contains("Newsletter Created"));
    assert!(body.contains("Newsletter saved"));
}

#[tokio::test]
async fn test_create_with_missing_fields_does_not_call_backend() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .post("/newsletters")
        .add_header("Cookie", common::AUTH)
        .multipart(newsletter_form("Draft title", "   "))
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Create Failed"));
    assert!(body.contains("content"));
    // The dialog stays open with what was typed.
    assert!(body.contains("value=\"Draft title\""));
}

#[tokio::test]
async fn test_create_backend_rejection_keeps_dialog_open() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/newsletters"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Title already used" })),
        )
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .post("/newsletters")
        .add_header("Cookie", common::AUTH)
        .multipart(newsletter_form("Spring Gala", "<p>Join us</p>"))
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Create Failed"));
    assert!(body.contains("Title already used"));
    assert!(body.contains("Create New Newsletter"));
}

#[tokio::test]
async fn test_create_uploads_image_before_saving() {
    let backend = MockServer::start().await;
    let assets = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "secure_url": "https://cdn.example.com/cover.png"
        })))
        .expect(1)
        .mount(&assets)
        .await;
    Mock::given(method("POST"))
        .and(path("/newsletters"))
        .and(body_partial_json(json!({
            "featuredImage": "https://cdn.example.com/cover.png"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&backend)
        .await;

    let server = common::make_server(common::create_test_state_with_uploads(&backend, &assets));

    let form = newsletter_form("Spring Gala", "<p>Join us</p>").add_part(
        "featuredImage",
        Part::bytes(vec![0x89, b'P', b'N', b'G'])
            .file_name("cover.png")
            .mime_type("image/png"),
    );

    let response = server
        .post("/newsletters")
        .add_header("Cookie", common::AUTH)
        .multipart(form)
        .await;

    response.assert_status(StatusCode::SEE_OTHER);

    let list = server
        .get("/newsletters")
        .add_header("Cookie", common::with_flash(&response))
        .await;
    assert!(list.text().contains("Your newsletter has been created."));
}

#[tokio::test]
async fn test_create_with_image_but_no_upload_host_fails() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let form = newsletter_form("Spring Gala", "<p>Join us</p>").add_part(
        "featuredImage",
        Part::bytes(vec![1, 2, 3]).file_name("cover.png"),
    );

    let response = server
        .post("/newsletters")
        .add_header("Cookie", common::AUTH)
        .multipart(form)
        .await;

    let body = response.text();
    assert!(body.contains("Create Failed"));
    assert!(body.contains("Image uploads are not configured"));
}

// ─── EDIT ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_edit_prefills_from_single_fetch() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/newsletters/n2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": common::newsletter_json("n2", "Press Kit", "published", "press", "2024-03-15T10:00:00Z")
        })))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .get("/newsletters/n2/edit")
        .add_header("Cookie", common::AUTH)
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Update Newsletter"));
    assert!(body.contains("value=\"Press Kit\""));
    assert!(body.contains("action=\"/newsletters/n2?page=1\""));
}

#[tokio::test]
async fn test_edit_returns_to_originating_page() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/newsletters/n2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": common::newsletter_json("n2", "Press Kit", "published", "press", "2024-03-15T10:00:00Z")
        })))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("PUT"))
        .and(path("/newsletters/n2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Updated" })))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let dialog = server
        .get("/newsletters/n2/edit?page=2&type=press")
        .add_header("Cookie", common::AUTH)
        .await;

    let body = dialog.text();
    assert!(body.contains("action=\"/newsletters/n2?page=2&amp;type=press\""));
    assert!(body.contains("href=\"/newsletters?page=2&amp;type=press\">Cancel</a>"));

    let response = server
        .post("/newsletters/n2?page=2&type=press")
        .add_header("Cookie", common::AUTH)
        .multipart(newsletter_form("Press Kit 2025", "<p>New kit</p>"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/newsletters?page=2&type=press");
}

#[tokio::test]
async fn test_edit_fetch_failure_returns_to_list() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/newsletters/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Newsletter not found" })))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .get("/newsletters/gone/edit")
        .add_header("Cookie", common::AUTH)
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/newsletters?page=1");

    let list = server
        .get("/newsletters")
        .add_header("Cookie", common::with_flash(&response))
        .await;
    let body = list.text();
    assert!(body.contains("Failed to fetch newsletter"));
    assert!(body.contains("Newsletter not found"));
}

#[tokio::test]
async fn test_update_sends_put() {
    let backend = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/newsletters/n2"))
        .and(body_partial_json(json!({ "title": "Press Kit 2025", "status": "draft" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Updated" })))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .post("/newsletters/n2")
        .add_header("Cookie", common::AUTH)
        .multipart(newsletter_form("Press Kit 2025", "<p>New kit</p>"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);

    let list = server
        .get("/newsletters")
        .add_header("Cookie", common::with_flash(&response))
        .await;
    assert!(list.text().contains("Newsletter Updated"));
}

#[tokio::test]
async fn test_update_failure_rerenders_edit_dialog() {
    let backend = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/newsletters/n2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .post("/newsletters/n2")
        .add_header("Cookie", common::AUTH)
        .multipart(newsletter_form("Press Kit 2025", "<p>New kit</p>"))
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Update Failed"));
    assert!(body.contains("Something went wrong"));
    assert!(body.contains("Update Newsletter"));
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_confirmation_issues_no_request() {
    let backend = MockServer::start().await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .get("/newsletters/n1/delete?title=Spring%20Gala")
        .add_header("Cookie", common::AUTH)
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Spring Gala"));
    assert!(body.contains("action=\"/newsletters/n1/delete?page=1\""));
    assert!(backend.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_issues_one_request() {
    let backend = MockServer::start().await;
    let before = vec![
        common::newsletter_json("n1", "Spring Gala", "draft", "general", "2024-04-02T10:00:00Z"),
        common::newsletter_json("n2", "Press Kit", "published", "press", "2024-03-15T10:00:00Z"),
    ];
    let after = vec![common::newsletter_json(
        "n2", "Press Kit", "published", "press", "2024-03-15T10:00:00Z",
    )];
    Mock::given(method("GET"))
        .and(path("/newsletters"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::list_body(before, 4, 32)))
        .up_to_n_times(1)
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/newsletters"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::list_body(after, 4, 31)))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/newsletters/n1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let table = server
        .get("/newsletters/table?page=3&status=draft")
        .add_header("Cookie", common::AUTH)
        .await;
    let body = table.text();
    assert!(body.contains("Spring Gala"));
    assert!(body.contains("href=\"/newsletters/n1/delete?title=Spring+Gala&amp;page=3&amp;status=draft\""));

    let response = server
        .post("/newsletters/n1/delete?page=3&status=draft")
        .add_header("Cookie", common::AUTH)
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/newsletters?page=3&status=draft");

    let list = server
        .get("/newsletters?page=3&status=draft")
        .add_header("Cookie", common::with_flash(&response))
        .await;
    let body = list.text();
    assert!(body.contains("Newsletter Deleted"));
    assert!(body.contains("The newsletter has been removed successfully."));
    assert!(body.contains("/newsletters/table?page=3&amp;status=draft"));

    let table = server
        .get("/newsletters/table?page=3&status=draft")
        .add_header("Cookie", common::AUTH)
        .await;
    let body = table.text();
    assert!(body.contains("Page 3 of 4"));
    assert!(!body.contains("Spring Gala"));
}

#[tokio::test]
async fn test_delete_failure_flashes_error() {
    let backend = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/newsletters/n1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "Not allowed" })))
        .expect(1)
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .post("/newsletters/n1/delete")
        .add_header("Cookie", common::AUTH)
        .await;

    let list = server
        .get("/newsletters")
        .add_header("Cookie", common::with_flash(&response))
        .await;
    let body = list.text();
    assert!(body.contains("Delete Failed"));
    assert!(body.contains("Not allowed"));
}

#[tokio::test]
async fn test_flash_shows_once() {
    let backend = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/newsletters/n1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&backend)
        .await;
    let server = common::make_server(common::create_test_state(&backend));

    let response = server
        .post("/newsletters/n1/delete")
        .add_header("Cookie", common::AUTH)
        .await;
    let list = server
        .get("/newsletters")
        .add_header("Cookie", common::with_flash(&response))
        .await;

    // The rendered page expires the cookie.
    let expired = list
        .headers()
        .get_all(axum::http::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("flash=") && v.contains("Max-Age=0"));
    assert!(expired);
}
