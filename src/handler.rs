use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use url::Url;

use crate::api::{DeleteResponse, ErrorResponse, HealthResponse, ListParams};
use crate::error::{ApiError, StoreError};
use crate::model::{Bookmark, now_iso8601};
use crate::store::BookmarkStore;
use crate::validation::{FieldErrors, validate_create};

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Mutex<BookmarkStore>>,
}

impl AppState {
    pub fn new(store: BookmarkStore) -> Self {
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Holds the store for one complete operation.
    pub fn store(&self) -> Result<MutexGuard<'_, BookmarkStore>, StoreError> {
        self.store
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

pub async fn healthcheck() -> impl IntoResponse {
    tracing::debug!("got healthcheck request");
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: now_iso8601(),
    })
}

pub async fn list_bookmarks(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = ListParams::from_pairs(pairs);
    let bookmarks: Vec<Bookmark> = {
        let store = state.store()?;
        match params.tag() {
            Some(tag) => store.filter_by_tag(tag).into_iter().cloned().collect(),
            None => store.list().to_vec(),
        }
    };

    tracing::debug!(count = bookmarks.len(), tag = ?params.tag(), "listed bookmarks");
    Ok((StatusCode::OK, Json(bookmarks)).into_response())
}

pub async fn get_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let bookmark = state
        .store()?
        .find_by_id(&id)
        .cloned()
        .ok_or_else(ApiError::bookmark_not_found)?;

    Ok((StatusCode::OK, Json(bookmark)).into_response())
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|rejection| match rejection {
        JsonRejection::BytesRejection(_) => {
            ApiError::Payload(rejection.status(), rejection.body_text())
        }
        _ => ApiError::Validation(FieldErrors::single("body", rejection.body_text())),
    })?;

    let input = validate_create(&body).map_err(ApiError::Validation)?;

    let title = match input.title.filter(|t| !t.is_empty()) {
        Some(title) => title,
        None => default_title(&input.url)?,
    };

    let bookmark = Bookmark::new(input.url, title, input.tags);
    state.store()?.insert(bookmark.clone());

    tracing::info!(id = %bookmark.id, url = %bookmark.url, "created bookmark");
    Ok((StatusCode::CREATED, Json(bookmark)).into_response())
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let bookmark = state
        .store()?
        .remove_by_id(&id)
        .ok_or_else(ApiError::bookmark_not_found)?;

    tracing::info!(id = %bookmark.id, "deleted bookmark");
    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            message: "Bookmark deleted".to_string(),
            bookmark,
        }),
    )
        .into_response())
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}

/// Hostname of an already-validated URL, used when no title is supplied.
///
/// URLs without a host (`mailto:`, `data:`) yield an empty title.
pub fn default_title(url: &str) -> Result<String, ApiError> {
    let parsed = Url::parse(url).map_err(ApiError::internal)?;
    Ok(parsed.host_str().unwrap_or_default().to_string())
}
