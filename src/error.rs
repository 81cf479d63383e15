//! Application error type shared by every layer.
//!
//! Errors raised by the API access layer carry the backend-provided message
//! when one exists. Views convert errors into notifications at the call site;
//! anything that escapes a handler is rendered as an HTML error page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Message shown to users when the backend gave no usable explanation.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Form or parameter validation failed before any request was issued.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The backend answered with a non-success status.
    ///
    /// `message` is the backend's `message` field, or [`GENERIC_FAILURE`].
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The backend could not be reached or its body could not be decoded.
    #[error("{message}")]
    Unavailable { message: String },

    /// The asset host rejected or failed an image upload.
    #[error("{message}")]
    Upload { message: String },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(status: u16, message: Option<String>) -> Self {
        Self::Upstream {
            status,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Text suitable for a user-facing notification.
    ///
    /// Backend messages and validation/upload explanations are passed through;
    /// transport and internal failures collapse to [`GENERIC_FAILURE`] since
    /// their text is only meaningful in logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation { message, .. }
            | AppError::Upstream { message, .. }
            | AppError::Upload { message } => message.clone(),
            AppError::Unavailable { .. } | AppError::Internal { .. } => {
                GENERIC_FAILURE.to_string()
            }
        }
    }

    /// HTTP status used when the error escapes a handler.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { status: 404, .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } | AppError::Upload { .. } => StatusCode::BAD_GATEWAY,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();
        let message = match fields.as_slice() {
            [] => "Invalid form submission".to_string(),
            [field] => format!("Please fill in a valid {}", field),
            _ => format!("Please fill in valid values for: {}", fields.join(", ")),
        };
        AppError::bad_request(message, json!({ "fields": fields }))
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    reason: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Internal { details, .. } => {
                tracing::error!(error = %self, details = %details, "Request failed");
            }
            _ => tracing::warn!(error = %self, "Request failed"),
        }

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.user_message(),
        };

        (status, page).into_response()
    }
}
