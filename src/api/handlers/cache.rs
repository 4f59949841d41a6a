//! Handler for explicit cache invalidation.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::api::dto::cache::InvalidateResponse;
use crate::state::AppState;

/// Removes one cache entry.
///
/// # Endpoint
///
/// `DELETE /api/cache/{key}`
///
/// Never fails: with the cache disabled or unreachable the response reports
/// `"invalidated": false`.
pub async fn invalidate_cache_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<InvalidateResponse> {
    let invalidated = state.cache.invalidate(&key).await;
    info!("Cache invalidation requested for {} (applied: {})", key, invalidated);

    Json(InvalidateResponse { key, invalidated })
}
