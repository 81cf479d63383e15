//! Repository trait for subscribers.

use crate::domain::entities::{NewSubscriber, Page, Subscriber};
use crate::domain::repositories::Saved;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for subscriber access.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpSubscriberRepository`] - REST backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Fetches one page of subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the backend rejects the request.
    /// Returns [`AppError::Unavailable`] if the backend cannot be reached.
    async fn list(&self, page: u32, limit: u32) -> Result<Page<Subscriber>, AppError>;

    async fn get(&self, id: &str) -> Result<Subscriber, AppError>;

    async fn create(&self, subscriber: NewSubscriber) -> Result<Saved<Subscriber>, AppError>;

    async fn update(
        &self,
        id: &str,
        subscriber: NewSubscriber,
    ) -> Result<Saved<Subscriber>, AppError>;

    async fn remove(&self, id: &str) -> Result<(), AppError>;
}
