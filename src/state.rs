//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ProjectService, SlugService};
use crate::domain::repositories::{ContentRepository, ProjectRepository};
use crate::infrastructure::cache::CacheFacade;

pub type DynSlugService = SlugService<dyn ContentRepository>;
pub type DynProjectService = ProjectService<dyn ProjectRepository, dyn ContentRepository>;

#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<DynProjectService>,
    pub slug_service: Arc<DynSlugService>,
    pub cache: Arc<CacheFacade>,
}

impl AppState {
    /// Wires services over the given repositories and cache.
    pub fn new(
        project_repository: Arc<dyn ProjectRepository>,
        content_repository: Arc<dyn ContentRepository>,
        cache: Arc<CacheFacade>,
        cache_ttl_seconds: u64,
        slug_max_attempts: usize,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(content_repository, slug_max_attempts));
        let project_service = Arc::new(ProjectService::new(
            project_repository,
            slug_service.clone(),
            cache.clone(),
            cache_ttl_seconds,
        ));

        Self {
            project_service,
            slug_service,
            cache,
        }
    }
}
