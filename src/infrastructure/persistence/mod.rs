//! PostgreSQL repository implementations.
//!
//! # Repositories
//!
//! - [`PgContentRepository`] - Slug existence checks per content table
//! - [`PgProjectRepository`] - Project listing and creation

pub mod pg_content_repository;
pub mod pg_project_repository;

pub use pg_content_repository::PgContentRepository;
pub use pg_project_repository::PgProjectRepository;
