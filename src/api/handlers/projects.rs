//! Handlers for project endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::project::{CreateProjectRequest, ProjectDto, ProjectListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists published projects, newest first.
///
/// # Endpoint
///
/// `GET /api/projects`
///
/// Served from the cache when available; see
/// [`crate::application::services::ProjectService::list_published`].
pub async fn list_projects_handler(
    State(state): State<AppState>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let projects = state.project_service.list_published().await?;

    Ok(Json(ProjectListResponse {
        total: projects.len(),
        items: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// Creates a project.
///
/// # Endpoint
///
/// `POST /api/projects`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Harbor",
///   "slug": "harbor",        // optional, generated from title if omitted
///   "summary": "...",        // optional
///   "published": true        // optional, default false
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for an invalid title or slug
/// - 409 Conflict if the slug is taken
pub async fn create_project_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectDto>), AppError> {
    payload.validate()?;

    let project = state.project_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(project.into())))
}
