//! API route configuration.

use crate::api::handlers::{
    create_project_handler, generate_slug_handler, invalidate_cache_handler,
    list_projects_handler, validate_slug_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /projects`         - Published projects (cached)
/// - `POST   /projects`         - Create a project
/// - `POST   /slugs/generate`   - Derive a slug, unique per content kind if requested
/// - `POST   /slugs/validate`   - Validate a slug and check availability
/// - `DELETE /cache/{key}`      - Invalidate one cache entry
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(list_projects_handler).post(create_project_handler),
        )
        .route("/slugs/generate", post(generate_slug_handler))
        .route("/slugs/validate", post(validate_slug_handler))
        .route("/cache/{key}", delete(invalidate_cache_handler))
}
