//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ContentRepository`] - Slug existence checks per content kind
//! - [`ProjectRepository`] - Project listing and creation

pub mod content_repository;
pub mod project_repository;

pub use content_repository::ContentRepository;
pub use project_repository::ProjectRepository;

#[cfg(test)]
pub use content_repository::MockContentRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
