use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved URL with its metadata. Records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl Bookmark {
    /// Builds a new record with a fresh v4 identifier and the current time.
    pub fn new(url: String, title: String, tags: Vec<String>) -> Self {
        Bookmark {
            id: Uuid::new_v4().to_string(),
            url,
            title,
            tags,
            created_at: now_iso8601(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Validated input for creating a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookmark {
    pub url: String,
    pub title: Option<String>,
    pub tags: Vec<String>,
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
