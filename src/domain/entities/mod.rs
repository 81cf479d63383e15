//! Core domain entities representing the dashboard's data model.
//!
//! Entities are plain data structures without I/O. The backend is the source
//! of truth; the dashboard only ever holds one page of them per request.
//!
//! # Entity Types
//!
//! - [`Subscriber`] - A newsletter subscriber
//! - [`Newsletter`] - A newsletter issue with its status and category
//! - [`Page`] - One page of records plus pagination metadata
//!
//! Creation payloads are separate structs: [`NewSubscriber`] and
//! [`NewsletterDraft`] (the latter is also used for updates).

pub mod newsletter;
pub mod page;
pub mod subscriber;

pub use newsletter::{Newsletter, NewsletterDraft, NewsletterStatus, NewsletterType};
pub use page::Page;
pub use subscriber::{NewSubscriber, Subscriber};
