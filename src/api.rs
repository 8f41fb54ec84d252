use crate::model::Bookmark;
use crate::validation::FieldErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    pub tag: Option<String>,
}

impl ListParams {
    /// Builds params from raw query pairs. A repeated `tag` keeps the first
    /// non-empty value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let tag = pairs
            .into_iter()
            .find(|(key, value)| key == "tag" && !value.is_empty())
            .map(|(_, value)| value);
        ListParams { tag }
    }

    /// An absent or empty `tag` means no filtering.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct InvalidInputResponse {
    pub error: String,
    pub details: FieldErrors,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub bookmark: Bookmark,
}
