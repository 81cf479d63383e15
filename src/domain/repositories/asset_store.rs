//! Storage abstraction for uploaded images.

use crate::error::AppError;
use async_trait::async_trait;

/// An image selected in a form, held in memory until it is uploaded.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// External host that stores images and hands back a public URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::assets::CloudinaryAssetStore`] - Cloudinary-style unsigned upload
/// - [`crate::infrastructure::assets::NullAssetStore`] - Uploads disabled
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Uploads the image and returns its secure URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upload`] if the host rejects the file or uploads
    /// are not configured.
    async fn upload(&self, image: ImageUpload) -> Result<String, AppError>;
}
