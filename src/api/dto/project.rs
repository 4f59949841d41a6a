//! DTOs for project endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ProjectDraft;
use crate::domain::entities::Project;

/// Request to create a project.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// Optional explicit slug; generated from the title when omitted.
    pub slug: Option<String>,

    #[validate(length(max = 2000))]
    pub summary: Option<String>,

    #[serde(default)]
    pub published: bool,
}

impl From<CreateProjectRequest> for ProjectDraft {
    fn from(request: CreateProjectRequest) -> Self {
        ProjectDraft {
            title: request.title,
            slug: request.slug,
            summary: request.summary,
            published: request.published,
        }
    }
}

/// A project as returned by the API.
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        ProjectDto {
            id: project.id,
            title: project.title,
            slug: project.slug,
            summary: project.summary,
            published: project.published,
            created_at: project.created_at,
        }
    }
}

/// Published project listing.
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub total: usize,
    pub items: Vec<ProjectDto>,
}
