//! PostgreSQL implementation of the project repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewProject, Project};
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    slug: String,
    summary: Option<String>,
    published: bool,
    created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            slug: row.slug,
            summary: row.summary,
            published: row.published,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for portfolio projects.
pub struct PgProjectRepository {
    pool: Arc<PgPool>,
}

impl PgProjectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn list_published(&self) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, slug, summary, published, created_at
            FROM projects
            WHERE published = TRUE
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn create(&self, new_project: NewProject) -> Result<Project, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (title, slug, summary, published)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, slug, summary, published, created_at
            "#,
        )
        .bind(new_project.title)
        .bind(new_project.slug)
        .bind(new_project.summary)
        .bind(new_project.published)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
