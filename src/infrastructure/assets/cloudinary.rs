//! Unsigned image uploads to a Cloudinary-compatible host.

use crate::domain::repositories::{AssetStore, ImageUpload};
use crate::error::AppError;
use crate::infrastructure::http::extract_message;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Posts images as multipart form data with an upload preset.
///
/// The host answers with JSON containing `secure_url`, which is what gets
/// stored in the newsletter's featured image.
pub struct CloudinaryAssetStore {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl CloudinaryAssetStore {
    /// Creates a store posting to `upload_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client fails to initialise.
    pub fn new(
        upload_url: impl Into<String>,
        upload_preset: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::internal("Failed to build HTTP client", json!({ "error": e.to_string() }))
            })?;

        Ok(Self {
            http,
            upload_url: upload_url.into(),
            upload_preset: upload_preset.into(),
        })
    }

    /// Cloudinary upload endpoint for a cloud name.
    pub fn upload_url_for(cloud_name: &str) -> String {
        format!("https://api.cloudinary.com/v1_1/{cloud_name}/upload")
    }
}

#[async_trait]
impl AssetStore for CloudinaryAssetStore {
    async fn upload(&self, image: ImageUpload) -> Result<String, AppError> {
        let size = image.bytes.len();
        let mut part = Part::bytes(image.bytes).file_name(image.file_name.clone());
        if let Some(content_type) = image.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|_| AppError::upload("Unsupported image type"))?;
        }

        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        tracing::debug!(file = %image.file_name, size, "Uploading image");

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Image upload request failed");
                AppError::upload("Image upload failed")
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|_| AppError::upload("Image upload failed"))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Asset host rejected upload");
            let reason = extract_message(&body)
                .map(|m| format!("Image upload failed: {m}"))
                .unwrap_or_else(|| "Image upload failed".to_string());
            return Err(AppError::upload(reason));
        }

        let uploaded: UploadResponse = serde_json::from_str(&body)
            .map_err(|_| AppError::upload("Image upload returned no URL"))?;

        tracing::info!(url = %uploaded.secure_url, "Image uploaded");
        Ok(uploaded.secure_url)
    }
}
