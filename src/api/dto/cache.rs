//! DTOs for cache administration.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    pub key: String,
    /// False when the cache is disabled or the store could not be reached.
    pub invalidated: bool,
}
