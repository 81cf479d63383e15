//! Application layer: services plus the view logic shared by the handlers.
//!
//! Services consume repository traits and give the web layer a narrow API.
//! The list and dialog modules hold the per-request view state.
//!
//! # Available Services
//!
//! - [`services::NewsletterService`] - Newsletter table and dialogs
//! - [`services::SubscriberService`] - Subscriber table and "add user" dialog
//! - [`services::DashboardService`] - Summary counts and recent records

pub mod dialog;
pub mod filters;
pub mod forms;
pub mod list_view;
pub mod services;
