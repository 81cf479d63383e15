//! # Newsletter Dashboard
//!
//! Server-rendered admin dashboard for a newsletter REST backend, built with
//! Axum and Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services, list views, filters and dialogs
//! - **Infrastructure Layer** ([`infrastructure`]) - REST backend client and image uploads
//! - **Web Layer** ([`web`]) - Handlers, route guard, templates' view models
//!
//! ## Features
//!
//! - Dashboard with subscriber/newsletter counts and recent records
//! - Paginated subscriber and newsletter tables with per-page filtering
//! - Create, edit and delete newsletters, with optional image upload
//! - Manual subscriber creation
//! - Token-cookie route guard
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="https://api.example.com/api"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the admin CLI
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DashboardService, NewsletterService, SubscriberService};
    pub use crate::domain::entities::{Newsletter, Page, Subscriber};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
