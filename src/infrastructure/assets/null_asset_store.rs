//! Asset store used when no image host is configured.

use crate::domain::repositories::{AssetStore, ImageUpload};
use crate::error::AppError;
use async_trait::async_trait;
use tracing::debug;

/// Rejects every upload.
///
/// Forms still work without an image host as long as no file is attached;
/// attaching one fails the submission with a clear message.
pub struct NullAssetStore;

impl NullAssetStore {
    pub fn new() -> Self {
        debug!("Using NullAssetStore (image uploads disabled)");
        Self
    }
}

impl Default for NullAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetStore for NullAssetStore {
    async fn upload(&self, _image: ImageUpload) -> Result<String, AppError> {
        Err(AppError::upload("Image uploads are not configured"))
    }
}
