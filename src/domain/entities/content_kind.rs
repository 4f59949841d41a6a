//! Content types that carry a slug.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A slugged content type.
///
/// Each kind maps to exactly one table, so slug uniqueness is scoped per kind:
/// a blog post and a project may share a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    BlogPost,
    Project,
    Career,
}

impl ContentKind {
    /// All kinds, in declaration order.
    pub const ALL: [ContentKind; 3] = [Self::BlogPost, Self::Project, Self::Career];

    /// Backing table name. Fixed per variant, safe to interpolate into SQL.
    pub fn table(&self) -> &'static str {
        match self {
            Self::BlogPost => "blog_posts",
            Self::Project => "projects",
            Self::Career => "careers",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlogPost => "blog_post",
            Self::Project => "project",
            Self::Career => "career",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.table() == s)
            .ok_or_else(|| {
                format!("unknown content kind '{}' (expected blog_post, project or career)", s)
            })
    }
}
