//! Business logic services for the application layer.

pub mod dashboard_service;
pub mod newsletter_service;
pub mod subscriber_service;

pub use dashboard_service::{DashboardService, DashboardSummary, RECENT_LIMIT};
pub use newsletter_service::NewsletterService;
pub use subscriber_service::SubscriberService;
