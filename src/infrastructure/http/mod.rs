//! REST backend integration.
//!
//! - [`ApiClient`] - shared reqwest wrapper (base URL, status and message handling)
//! - [`HttpNewsletterRepository`] / [`HttpSubscriberRepository`] - resource repositories
//! - [`wire`] - JSON shapes and conversions to domain entities

mod api_client;
mod newsletter_repository;
mod subscriber_repository;
pub mod wire;

pub use api_client::{ApiClient, extract_message};
pub use newsletter_repository::HttpNewsletterRepository;
pub use subscriber_repository::HttpSubscriberRepository;
