use axum::{
    Router,
    http::Method,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handler::{
    self, AppState, create_bookmark, delete_bookmark, get_bookmark, healthcheck, list_bookmarks,
};

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookmarks).post(create_bookmark))
        .route("/:id", get(get_bookmark).delete(delete_bookmark))
}

/// Builds the full application over the given state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(healthcheck))
        .nest("/api/bookmarks", bookmark_routes())
        .fallback(handler::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
