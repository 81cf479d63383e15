//! Newsletter listing and mutation service.

use crate::application::forms::NewsletterForm;
use crate::application::list_view::ListView;
use crate::domain::entities::{Newsletter, NewsletterDraft};
use crate::domain::repositories::{AssetStore, ImageUpload, NewsletterRepository, Saved};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

/// Service behind the newsletters table and its dialogs.
///
/// Every submission is validated before anything leaves the process: an
/// invalid form never triggers an upload or a backend request.
pub struct NewsletterService<R: NewsletterRepository> {
    repository: Arc<R>,
    assets: Arc<dyn AssetStore>,
    page_size: u32,
}

impl<R: NewsletterRepository> NewsletterService<R> {
    pub fn new(repository: Arc<R>, assets: Arc<dyn AssetStore>, page_size: u32) -> Self {
        Self {
            repository,
            assets,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Loads one page of newsletters, unfiltered.
    ///
    /// # Errors
    ///
    /// Propagates the repository error; the caller shows it as a notice.
    pub async fn list_page(&self, page: u32) -> Result<ListView<Newsletter>, AppError> {
        let page = page.max(1);
        let records = self.repository.list(page, self.page_size).await?;
        debug!(page, rows = records.items.len(), "Loaded newsletters page");
        Ok(ListView::from_page(page, records))
    }

    /// Fetches a newsletter once and maps it into the edit form.
    pub async fn edit_form(&self, id: &str) -> Result<NewsletterForm, AppError> {
        let newsletter = self.repository.get(id).await?;
        Ok(NewsletterForm::from(&newsletter))
    }

    /// Creates a newsletter, uploading `image` first when one was chosen.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing title or content.
    /// Returns [`AppError::Upload`] if the image host rejects the file.
    /// Returns [`AppError::Upstream`] if the backend rejects the record.
    pub async fn create(
        &self,
        form: NewsletterForm,
        image: Option<ImageUpload>,
    ) -> Result<Saved<Newsletter>, AppError> {
        let draft = self.prepare(&form, image).await?;
        let saved = self.repository.create(draft).await?;
        info!(title = %form.title.trim(), "Newsletter created");
        Ok(saved)
    }

    /// Replaces a newsletter's fields, uploading `image` first when one was chosen.
    ///
    /// # Errors
    ///
    /// Same as [`NewsletterService::create`].
    pub async fn update(
        &self,
        id: &str,
        form: NewsletterForm,
        image: Option<ImageUpload>,
    ) -> Result<Saved<Newsletter>, AppError> {
        let draft = self.prepare(&form, image).await?;
        let saved = self.repository.update(id, draft).await?;
        info!(id, "Newsletter updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.remove(id).await?;
        info!(id, "Newsletter deleted");
        Ok(())
    }

    async fn prepare(
        &self,
        form: &NewsletterForm,
        image: Option<ImageUpload>,
    ) -> Result<NewsletterDraft, AppError> {
        form.validate()?;
        let mut draft = form.to_draft();

        if let Some(image) = image.filter(|image| !image.bytes.is_empty()) {
            draft.featured_image = self.assets.upload(image).await?;
        }

        Ok(draft)
    }
}
