//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ContentKind`] - Slugged content types and their tables
//! - [`Project`] - A portfolio project
//!
//! Creation inputs live next to their entity (`NewProject`).

pub mod content_kind;
pub mod project;

pub use content_kind::ContentKind;
pub use project::{NewProject, Project};
