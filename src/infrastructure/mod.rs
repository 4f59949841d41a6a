//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - Fail-open cache facade over Redis or in-memory stores
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
