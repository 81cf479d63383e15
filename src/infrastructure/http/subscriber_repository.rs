//! REST implementation of [`SubscriberRepository`].

use super::api_client::ApiClient;
use super::wire::{ListBody, RecordBody, SaveEnvelope, SubscriberPayload, SubscriberRecord};
use crate::domain::entities::{NewSubscriber, Page, Subscriber};
use crate::domain::repositories::{Saved, SubscriberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

const RESOURCE: &str = "subscribers";

/// Subscriber repository backed by `/subscribers` endpoints.
pub struct HttpSubscriberRepository {
    client: Arc<ApiClient>,
}

impl HttpSubscriberRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SubscriberRepository for HttpSubscriberRepository {
    async fn list(&self, page: u32, limit: u32) -> Result<Page<Subscriber>, AppError> {
        let body: ListBody<SubscriberRecord> = self
            .client
            .get_json(
                &[RESOURCE],
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        Ok(body.into_page(limit))
    }

    async fn get(&self, id: &str) -> Result<Subscriber, AppError> {
        let body: RecordBody<SubscriberRecord> =
            self.client.get_json(&[RESOURCE, id], &[]).await?;

        Ok(body.into_record().into())
    }

    async fn create(&self, subscriber: NewSubscriber) -> Result<Saved<Subscriber>, AppError> {
        let saved: SaveEnvelope<SubscriberRecord> = self
            .client
            .send_json(Method::POST, &[RESOURCE], &SubscriberPayload::from(&subscriber))
            .await?;

        Ok(Saved {
            record: saved.data.map(Subscriber::from),
            message: saved.message,
        })
    }

    async fn update(
        &self,
        id: &str,
        subscriber: NewSubscriber,
    ) -> Result<Saved<Subscriber>, AppError> {
        let saved: SaveEnvelope<SubscriberRecord> = self
            .client
            .send_json(
                Method::PUT,
                &[RESOURCE, id],
                &SubscriberPayload::from(&subscriber),
            )
            .await?;

        Ok(Saved {
            record: saved.data.map(Subscriber::from),
            message: saved.message,
        })
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        self.client.delete(&[RESOURCE, id]).await
    }
}
