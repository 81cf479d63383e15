//! Domain layer containing the dashboard's entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (subscribers, newsletters, pages)
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
