//! Project listing (cached) and creation.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{ContentKind, NewProject, Project};
use crate::domain::repositories::{ContentRepository, ProjectRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheFacade;
use crate::utils::slug::SlugOptions;

use super::slug_service::SlugService;

/// Cache key of the published project listing.
pub const PUBLISHED_PROJECTS_KEY: &str = "projects:published";

/// Caller input for [`ProjectService::create`].
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    /// Used as-is after validation; generated from the title when absent.
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub published: bool,
}

/// Service for the project portfolio.
///
/// The published listing is read through the cache; any write invalidates it.
pub struct ProjectService<P, C>
where
    P: ProjectRepository + ?Sized,
    C: ContentRepository + ?Sized,
{
    project_repository: Arc<P>,
    slug_service: Arc<SlugService<C>>,
    cache: Arc<CacheFacade>,
    cache_ttl_seconds: u64,
}

impl<P, C> ProjectService<P, C>
where
    P: ProjectRepository + ?Sized,
    C: ContentRepository + ?Sized,
{
    /// Creates a new project service.
    pub fn new(
        project_repository: Arc<P>,
        slug_service: Arc<SlugService<C>>,
        cache: Arc<CacheFacade>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            project_repository,
            slug_service,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Returns published projects, newest first.
    ///
    /// Served from the cache when possible; on a miss the listing is loaded from
    /// the repository and cached for the configured TTL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Cache failures are not errors.
    pub async fn list_published(&self) -> Result<Vec<Project>, AppError> {
        if let Some(projects) = self
            .cache
            .get_cached::<Vec<Project>>(PUBLISHED_PROJECTS_KEY)
            .await
        {
            return Ok(projects);
        }

        let projects = self.project_repository.list_published().await?;

        self.cache
            .set_cached(PUBLISHED_PROJECTS_KEY, &projects, self.cache_ttl_seconds)
            .await;

        Ok(projects)
    }

    /// Creates a project and invalidates the cached listing.
    ///
    /// # Slug
    ///
    /// - A supplied slug must pass validation and be free
    /// - Otherwise one is generated from the title, suffixed on collision
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty title or invalid slug,
    /// [`AppError::Conflict`] if the slug is taken, and repository errors unchanged.
    pub async fn create(&self, draft: ProjectDraft) -> Result<Project, AppError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request(
                "Project title is required",
                json!({ "field": "title" }),
            ));
        }

        let slug = match draft.slug {
            Some(slug) => {
                self.slug_service
                    .ensure_usable(ContentKind::Project, &slug, None)
                    .await?;
                slug
            }
            None => {
                self.slug_service
                    .suggest(ContentKind::Project, &title, None, &SlugOptions::default())
                    .await?
            }
        };

        let project = self
            .project_repository
            .create(NewProject {
                title,
                slug,
                summary: draft.summary,
                published: draft.published,
            })
            .await?;

        self.cache.invalidate(PUBLISHED_PROJECTS_KEY).await;

        info!("Project created: {} (id {})", project.slug, project.id);
        Ok(project)
    }

    /// Checks database connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.project_repository.ping().await
    }
}
