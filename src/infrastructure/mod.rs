//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer against the outside
//! world.
//!
//! # Modules
//!
//! - [`http`] - REST backend client and resource repositories
//! - [`assets`] - Image host uploads (Cloudinary-style and no-op)

pub mod assets;
pub mod http;
