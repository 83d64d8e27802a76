//! Local preview server.
//!
//! Renders the page per request (so `?filter=` works without script) and
//! exposes the content as JSON for tooling.

mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::content::ContentStore;

pub fn create_router(store: Arc<ContentStore>, public_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        // Filters
        .route("/filters", get(handlers::list_filters))
        // Publications
        .route("/publications", get(handlers::list_publications))
        .route("/publications/{id}", get(handlers::get_publication))
        // News
        .route("/news/{index}/follow", get(handlers::follow_news))
        // Health
        .route("/health", get(handlers::health));

    let mut router = Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api);

    if let Some(dir) = public_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
