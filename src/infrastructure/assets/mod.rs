//! Image hosting for featured images.
//!
//! Provides two [`AssetStore`](crate::domain::repositories::AssetStore) implementations:
//! - [`CloudinaryAssetStore`] - Unsigned multipart upload with a preset
//! - [`NullAssetStore`] - Uploads disabled

mod cloudinary;
mod null_asset_store;

pub use cloudinary::CloudinaryAssetStore;
pub use null_asset_store::NullAssetStore;
