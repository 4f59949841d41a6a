//! Business logic services for the application layer.

pub mod project_service;
pub mod slug_service;

pub use project_service::{PUBLISHED_PROJECTS_KEY, ProjectDraft, ProjectService};
pub use slug_service::{ScopedSlugCheck, SlugCheck, SlugService};
