//! REST implementation of [`NewsletterRepository`].

use super::api_client::ApiClient;
use super::wire::{ListBody, NewsletterPayload, NewsletterRecord, RecordBody, SaveEnvelope};
use crate::domain::entities::{Newsletter, NewsletterDraft, Page};
use crate::domain::repositories::{NewsletterRepository, Saved};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

const RESOURCE: &str = "newsletters";

/// Newsletter repository backed by `/newsletters` endpoints.
pub struct HttpNewsletterRepository {
    client: Arc<ApiClient>,
}

impl HttpNewsletterRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NewsletterRepository for HttpNewsletterRepository {
    async fn list(&self, page: u32, limit: u32) -> Result<Page<Newsletter>, AppError> {
        let body: ListBody<NewsletterRecord> = self
            .client
            .get_json(
                &[RESOURCE],
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        Ok(body.into_page(limit))
    }

    async fn get(&self, id: &str) -> Result<Newsletter, AppError> {
        let body: RecordBody<NewsletterRecord> =
            self.client.get_json(&[RESOURCE, id], &[]).await?;

        Ok(body.into_record().into())
    }

    async fn create(&self, draft: NewsletterDraft) -> Result<Saved<Newsletter>, AppError> {
        let saved: SaveEnvelope<NewsletterRecord> = self
            .client
            .send_json(Method::POST, &[RESOURCE], &NewsletterPayload::from(&draft))
            .await?;

        Ok(Saved {
            record: saved.data.map(Newsletter::from),
            message: saved.message,
        })
    }

    async fn update(
        &self,
        id: &str,
        draft: NewsletterDraft,
    ) -> Result<Saved<Newsletter>, AppError> {
        let saved: SaveEnvelope<NewsletterRecord> = self
            .client
            .send_json(Method::PUT, &[RESOURCE, id], &NewsletterPayload::from(&draft))
            .await?;

        Ok(Saved {
            record: saved.data.map(Newsletter::from),
            message: saved.message,
        })
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(&[RESOURCE, id]).await
    }
}
