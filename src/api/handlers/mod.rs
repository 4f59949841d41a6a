//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cache;
pub mod health;
pub mod projects;
pub mod slugs;

pub use cache::invalidate_cache_handler;
pub use health::health_handler;
pub use projects::{create_project_handler, list_projects_handler};
pub use slugs::{generate_slug_handler, validate_slug_handler};
