use crate::registry;
use crate::services::{match_collections, normalize_query, ContentDocument, SearchResult};
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

#[derive(Debug, Serialize)]
pub struct CollectionListResponse {
    pub items: Vec<ContentDocument>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

async fn load_collections(state: &AppState) -> Result<Vec<ContentDocument>, AppError> {
    let defaults = registry::default_collection_documents()?;
    state.content.get_collection_list(defaults).await
}

pub async fn list_collections(
    State(state): State<AppState>,
) -> Result<Json<CollectionListResponse>, AppError> {
    let items = load_collections(&state).await?;
    Ok(Json(CollectionListResponse { items }))
}

/// Suggests collections whose name contains `q`. Blank queries return no
/// results without touching the store.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let Some(query) = normalize_query(params.q.as_deref()) else {
        return Ok(Json(SearchResponse { results: vec![] }));
    };

    let collections = load_collections(&state).await?;
    let results = match_collections(&query, &collections);
    tracing::debug!(query = %query, hits = results.len(), "Collection search");

    Ok(Json(SearchResponse { results }))
}
