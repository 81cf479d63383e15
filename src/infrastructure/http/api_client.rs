//! Thin HTTP wrapper around the newsletter REST backend.
//!
//! Every resource repository shares one [`ApiClient`]. Status handling and
//! message extraction live here so repositories only describe endpoints and
//! wire shapes.

use crate::error::AppError;
use reqwest::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::time::Duration;
use url::Url;

const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client for the backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the URL cannot be used as a base or
    /// the HTTP client fails to initialise.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::internal(
                "Invalid API base URL",
                json!({ "url": base_url, "error": e.to_string() }),
            )
        })?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::internal(
                "API base URL cannot have path segments",
                json!({ "url": base_url.as_str() }),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal("Failed to build HTTP client", json!({ "error": e.to_string() })))?;

        Ok(Self { http, base_url })
    }

    /// Resolves path segments against the base URL, percent-encoding each.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `GET` a JSON document.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let request = self.http.get(self.endpoint(segments)).query(query);
        let body = self.execute(Method::GET, request).await?;
        decode(&body)
    }

    /// Sends a JSON body with `method` and decodes the JSON answer.
    ///
    /// An empty answer (e.g. `204 No Content`) decodes as `T::default()`.
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        payload: &B,
    ) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let request = self
            .http
            .request(method.clone(), self.endpoint(segments))
            .json(payload);
        let body = self.execute(method, request).await?;

        if body.trim().is_empty() {
            return Ok(T::default());
        }
        decode(&body)
    }

    /// `DELETE` a resource, ignoring any answer body.
    pub async fn delete(&self, segments: &[&str]) -> Result<(), AppError> {
        let request = self.http.delete(self.endpoint(segments));
        self.execute(Method::DELETE, request).await.map(|_| ())
    }

    /// Sends the request and returns the body of a successful answer.
    async fn execute(&self, method: Method, request: RequestBuilder) -> Result<String, AppError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, error = %e, "Backend request failed");
            AppError::unavailable(format!("Backend request failed: {e}"))
        })?;

        let status = response.status();
        let url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::unavailable(format!("Failed to read backend response: {e}")))?;

        tracing::debug!(%method, %url, status = status.as_u16(), "Backend responded");

        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "Backend rejected request");
            return Err(AppError::upstream(status.as_u16(), extract_message(&body)));
        }

        Ok(body)
    }
}

/// Pulls the human-readable explanation out of an error body.
///
/// Looks at `message`, then `error` (string or `{ "message": .. }`).
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .or_else(|| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
        })?;

    Some(message.to_string())
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "Backend returned an unexpected body");
        AppError::unavailable(format!("Unexpected response from backend: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = client("http://localhost:4000/api");
        assert_eq!(
            api.endpoint(&["newsletters"]).as_str(),
            "http://localhost:4000/api/newsletters"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let api = client("http://localhost:4000/api/");
        assert_eq!(
            api.endpoint(&["newsletters", "abc"]).as_str(),
            "http://localhost:4000/api/newsletters/abc"
        );
    }

    #[test]
    fn test_endpoint_encodes_identifiers() {
        let api = client("http://localhost:4000");
        assert_eq!(
            api.endpoint(&["newsletters", "a/b c"]).as_str(),
            "http://localhost:4000/newsletters/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(ApiClient::new("mailto:admin@example.com", Duration::from_secs(1)).is_err());
        assert!(ApiClient::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_extract_message_variants() {
        assert_eq!(
            extract_message(r#"{"message":"Newsletter not found"}"#).as_deref(),
            Some("Newsletter not found")
        );
        assert_eq!(
            extract_message(r#"{"error":"Bad input"}"#).as_deref(),
            Some("Bad input")
        );
        assert_eq!(
            extract_message(r#"{"error":{"message":"Nested"}}"#).as_deref(),
            Some("Nested")
        );
        assert_eq!(extract_message("<html>502</html>"), None);
        assert_eq!(extract_message(r#"{"ok":false}"#), None);
    }
}
