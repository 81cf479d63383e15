//! Subscriber listing and manual creation.

use crate::application::forms::SubscriberForm;
use crate::application::list_view::ListView;
use crate::domain::entities::Subscriber;
use crate::domain::repositories::{Saved, SubscriberRepository};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

pub struct SubscriberService<R: SubscriberRepository> {
    repository: Arc<R>,
    page_size: u32,
}

impl<R: SubscriberRepository> SubscriberService<R> {
    pub fn new(repository: Arc<R>, page_size: u32) -> Self {
        Self {
            repository,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Loads one page of subscribers, unfiltered.
    pub async fn list_page(&self, page: u32) -> Result<ListView<Subscriber>, AppError> {
        let page = page.max(1);
        let records = self.repository.list(page, self.page_size).await?;
        debug!(page, rows = records.items.len(), "Loaded subscribers page");
        Ok(ListView::from_page(page, records))
    }

    /// Adds a subscriber from the "add user" dialog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank name or malformed email.
    /// Returns [`AppError::Upstream`] if the backend rejects the subscriber.
    pub async fn create(&self, form: SubscriberForm) -> Result<Saved<Subscriber>, AppError> {
        form.validate()?;
        let saved = self.repository.create(form.to_new_subscriber()).await?;
        info!(email = %form.email.trim(), "Subscriber created");
        Ok(saved)
    }
}
