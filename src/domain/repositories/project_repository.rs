//! Repository trait for project data access.

use crate::domain::entities::{NewProject, Project};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for portfolio projects.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProjectRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Lists published projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_published(&self) -> Result<Vec<Project>, AppError>;

    /// Inserts a project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken (unique index),
    /// [`AppError::Internal`] on other database errors.
    async fn create(&self, new_project: NewProject) -> Result<Project, AppError>;

    /// Round-trips to the database. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
