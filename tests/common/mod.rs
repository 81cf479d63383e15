#![allow(dead_code)]

use axum::http::header::SET_COOKIE;
use axum_test::{TestResponse, TestServer};
use newsletter_dashboard::domain::repositories::AssetStore;
use newsletter_dashboard::infrastructure::assets::{CloudinaryAssetStore, NullAssetStore};
use newsletter_dashboard::infrastructure::http::ApiClient;
use newsletter_dashboard::routes::build_router;
use newsletter_dashboard::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub const PAGE_SIZE: u32 = 10;

/// Cookie header of a signed-in browser.
pub const AUTH: &str = "token=test-token";

pub fn api_client(backend: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&backend.uri(), Duration::from_secs(5)).unwrap())
}

/// State wired against `backend`, with image uploads disabled.
pub fn create_test_state(backend: &MockServer) -> AppState {
    AppState::new(
        api_client(backend),
        Arc::new(NullAssetStore::new()),
        PAGE_SIZE,
        false,
    )
}

/// State wired against `backend`, uploading images to `{assets}/upload`.
pub fn create_test_state_with_uploads(backend: &MockServer, assets: &MockServer) -> AppState {
    let store: Arc<dyn AssetStore> = Arc::new(
        CloudinaryAssetStore::new(
            format!("{}/upload", assets.uri()),
            "unsigned",
            Duration::from_secs(5),
        )
        .unwrap(),
    );
    AppState::new(api_client(backend), store, PAGE_SIZE, false)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

pub fn newsletter_json(id: &str, title: &str, status: &str, kind: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "subTitle": format!("About {title}"),
        "content": format!("<p>{title}</p>"),
        "type": kind,
        "status": status,
        "featuredImage": "",
        "createdAt": created_at,
        "views": 1200
    })
}

pub fn subscriber_json(id: &str, first: &str, last: &str, email: &str, active: bool) -> Value {
    json!({
        "_id": id,
        "firstName": first,
        "lastName": last,
        "email": email,
        "isActive": active,
        "createdAt": "2024-03-01T09:30:00Z"
    })
}

/// List envelope as answered by `GET /{resource}`.
pub fn list_body(items: Vec<Value>, pages: u32, total: u64) -> Value {
    json!({
        "data": items,
        "pagination": { "pages": pages, "total": total }
    })
}

/// `name=value` pair of the `flash` cookie set by `response`.
pub fn flash_cookie(response: &TestResponse) -> String {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("flash="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
        .expect("response sets a flash cookie")
}

/// Cookie header carrying the session token and a pending flash.
pub fn with_flash(response: &TestResponse) -> String {
    format!("{AUTH}; {}", flash_cookie(response))
}
