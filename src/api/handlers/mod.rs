use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content::ContentStore;
use crate::models::*;
use crate::render;
use crate::session::{FilterSession, Navigation};

type Store = State<Arc<ContentStore>>;

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub filter: Option<String>,
}

fn not_found(what: &str) -> (StatusCode, String) {
    tracing::debug!("{} not found", what);
    (StatusCode::NOT_FOUND, format!("{} not found", what))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Page
// ============================================================

pub async fn index(State(store): Store, Query(query): Query<FilterQuery>) -> Html<String> {
    let session = FilterSession::with_filter(&store, query.filter.as_deref());
    Html(render::render_document(&session))
}

// ============================================================
// Filters
// ============================================================

pub async fn list_filters(State(store): Store) -> Json<Vec<FilterCategory>> {
    Json(store.filters().to_vec())
}

// ============================================================
// Publications
// ============================================================

pub async fn list_publications(
    State(store): Store,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<Publication>> {
    let session = FilterSession::with_filter(&store, query.filter.as_deref());
    Json(session.visible_publications().into_iter().cloned().collect())
}

pub async fn get_publication(
    State(store): Store,
    Path(id): Path<String>,
) -> Result<Json<Publication>, (StatusCode, String)> {
    store
        .publication(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Publication"))
}

// ============================================================
// News
// ============================================================

/// Outcome of clicking a news item while `filter` is active.
#[derive(Debug, Serialize)]
pub struct FollowResponse {
    pub navigation: Navigation,
    pub active_filter: String,
}

pub async fn follow_news(
    State(store): Store,
    Path(index): Path<usize>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<FollowResponse>, (StatusCode, String)> {
    let item = store
        .news()
        .get(index)
        .ok_or_else(|| not_found("News item"))?;

    let mut session = FilterSession::with_filter(&store, query.filter.as_deref());
    let navigation = session.follow_news_link(item);
    Ok(Json(FollowResponse {
        navigation,
        active_filter: session.active_filter_id().to_string(),
    }))
}
