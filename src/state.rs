//! Shared application state injected into every handler.

use crate::application::services::{DashboardService, NewsletterService, SubscriberService};
use crate::domain::repositories::AssetStore;
use crate::infrastructure::http::{ApiClient, HttpNewsletterRepository, HttpSubscriberRepository};
use std::sync::Arc;

pub type Newsletters = NewsletterService<HttpNewsletterRepository>;
pub type Subscribers = SubscriberService<HttpSubscriberRepository>;
pub type Dashboard = DashboardService<HttpSubscriberRepository, HttpNewsletterRepository>;

/// Immutable per-process state. Cloning is cheap: every service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub newsletter_service: Arc<Newsletters>,
    pub subscriber_service: Arc<Subscribers>,
    pub dashboard_service: Arc<Dashboard>,
    /// Marks the `token` cookie `Secure`.
    pub secure_cookies: bool,
}

impl AppState {
    /// Wires both HTTP repositories onto one shared API client.
    pub fn new(
        api: Arc<ApiClient>,
        assets: Arc<dyn AssetStore>,
        page_size: u32,
        secure_cookies: bool,
    ) -> Self {
        let newsletters = Arc::new(HttpNewsletterRepository::new(api.clone()));
        let subscribers = Arc::new(HttpSubscriberRepository::new(api));

        Self {
            newsletter_service: Arc::new(NewsletterService::new(
                newsletters.clone(),
                assets,
                page_size,
            )),
            subscriber_service: Arc::new(SubscriberService::new(subscribers.clone(), page_size)),
            dashboard_service: Arc::new(DashboardService::new(
                subscribers,
                newsletters,
                page_size,
            )),
            secure_cookies,
        }
    }
}
