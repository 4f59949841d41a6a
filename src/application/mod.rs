//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the cache facade, and give HTTP
//! handlers and the admin CLI a single entry point per use case.
//!
//! # Available Services
//!
//! - [`services::slug_service::SlugService`] - Slug suggestion and availability checks
//! - [`services::project_service::ProjectService`] - Cached project listing and creation

pub mod services;
