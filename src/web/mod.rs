//! Web dashboard layer: server-rendered pages for newsletters and subscribers.
//!
//! Uses Askama templates for rendering. List tables are served as separate
//! fragments so the page shell renders before the backend answers.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Route guard and request tracing
//! - [`routes`] - Dashboard route configuration
//! - [`flash`] - One-shot notifications across redirects
//! - [`nav`] - Side navigation and page shell
//! - [`params`], [`views`] - Query parameters and display models

pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod nav;
pub mod params;
pub mod routes;
pub mod views;
