//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the REST backend and the image host so application
//! services can be tested without the network.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`NewsletterRepository`] - Newsletter CRUD
//! - [`SubscriberRepository`] - Subscriber listing and manual creation
//! - [`AssetStore`] - Image uploads
//!
//! # Testing
//!
//! See integration tests in `tests/api_client.rs` for the HTTP implementations.

pub mod asset_store;
pub mod newsletter_repository;
pub mod subscriber_repository;

pub use asset_store::{AssetStore, ImageUpload};
pub use newsletter_repository::{NewsletterRepository, Saved};
pub use subscriber_repository::SubscriberRepository;

#[cfg(test)]
pub use asset_store::MockAssetStore;
#[cfg(test)]
pub use newsletter_repository::MockNewsletterRepository;
#[cfg(test)]
pub use subscriber_repository::MockSubscriberRepository;
