//! Utility functions shared across layers.
//!
//! - [`slug`] - Slug generation, validation and uniqueness resolution

pub mod slug;
