//! Project entity shown on the public portfolio page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio project.
///
/// Serializable in both directions so published listings can sit in the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for inserting a project. The slug is already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_survives_json() {
        let project = Project {
            id: 7,
            title: "Harbor".to_string(),
            slug: "harbor".to_string(),
            summary: None,
            published: true,
            created_at: Utc::now(),
        };

        let raw = serde_json::to_string(&project).unwrap();
        let decoded: Project = serde_json::from_str(&raw).unwrap();

        assert_eq!(decoded, project);
    }
}
