//! Repository trait for newsletters.

use crate::domain::entities::{Newsletter, NewsletterDraft, Page};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of a create or update call.
///
/// The backend may or may not echo the saved record; it usually sends a
/// human-readable message that is shown in the success notification.
#[derive(Debug, Clone)]
pub struct Saved<T> {
    pub record: Option<T>,
    pub message: Option<String>,
}

impl<T> Default for Saved<T> {
    fn default() -> Self {
        Self {
            record: None,
            message: None,
        }
    }
}

/// Repository interface for newsletter CRUD.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpNewsletterRepository`] - REST backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Fetches one page of newsletters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the backend rejects the request.
    /// Returns [`AppError::Unavailable`] if the backend cannot be reached.
    async fn list(&self, page: u32, limit: u32) -> Result<Page<Newsletter>, AppError>;

    /// Fetches a single newsletter by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with status 404 if the newsletter does not exist.
    async fn get(&self, id: &str) -> Result<Newsletter, AppError>;

    /// Creates a newsletter.
    async fn create(&self, draft: NewsletterDraft) -> Result<Saved<Newsletter>, AppError>;

    /// Replaces the editable fields of an existing newsletter.
    async fn update(&self, id: &str, draft: NewsletterDraft)
    -> Result<Saved<Newsletter>, AppError>;

    /// Deletes a newsletter.
    async fn remove(&self, id: &str) -> Result<(), AppError>;
}
