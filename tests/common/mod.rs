#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use cms_service::domain::entities::{ContentKind, NewProject, Project};
use cms_service::domain::repositories::{ContentRepository, ProjectRepository};
use cms_service::error::AppError;
use cms_service::infrastructure::cache::{CacheFacade, MemoryCache};
use cms_service::state::AppState;

/// Content store backing both repository traits, so slugs of created projects
/// are visible to uniqueness checks.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<(ContentKind, i64, String)>>,
    projects: Mutex<Vec<Project>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    offline: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers a slug for `kind` and returns its row id.
    pub fn seed(&self, kind: ContentKind, slug: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        self.rows
            .lock()
            .unwrap()
            .push((kind, id, slug.to_string()));
        id
    }

    /// Number of times the project listing was read from the store.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Makes every call fail as if the database were down.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for InMemoryStore {
    async fn slug_exists(
        &self,
        kind: ContentKind,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError> {
        self.check_online()?;

        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|(k, id, s)| *k == kind && s == slug && Some(*id) != exclude_id))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list_published(&self) -> Result<Vec<Project>, AppError> {
        self.check_online()?;
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let mut projects: Vec<Project> = self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(projects)
    }

    async fn create(&self, new_project: NewProject) -> Result<Project, AppError> {
        self.check_online()?;

        if self.slug_exists(ContentKind::Project, &new_project.slug, None).await? {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "projects_slug_key" }),
            ));
        }

        let id = self.seed(ContentKind::Project, &new_project.slug);
        let project = Project {
            id,
            title: new_project.title,
            slug: new_project.slug,
            summary: new_project.summary,
            published: new_project.published,
            created_at: Utc::now(),
        };

        self.projects.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}

/// State over `store` with an in-process cache.
pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    create_test_state_with_cache(
        store,
        Arc::new(CacheFacade::with_backend(Arc::new(MemoryCache::new()))),
    )
}

pub fn create_test_state_with_cache(store: Arc<InMemoryStore>, cache: Arc<CacheFacade>) -> AppState {
    AppState::new(store.clone(), store, cache, 300, 5)
}
