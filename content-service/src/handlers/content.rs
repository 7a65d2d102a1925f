//! Read and write handlers for the singleton content blocks.

use crate::models::FeaturedRail;
use crate::registry::ContentShape;
use crate::services::singleton::from_content_document;
use crate::services::ContentDocument;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use mongodb::bson;
use service_core::error::AppError;

/// `GET` for any singleton block: the stored document, or the seeded default.
pub async fn get_content<T: ContentShape>(
    State(state): State<AppState>,
) -> Result<Json<ContentDocument>, AppError> {
    let default = T::default_document()?;
    let doc = state.content.get_singleton(T::KEY, default).await?;
    Ok(Json(doc))
}

/// `PUT` for a singleton block with a declared shape. The body is validated
/// before anything is written.
pub async fn put_content<T: ContentShape>(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<T>,
) -> Result<Json<ContentDocument>, AppError> {
    let doc = bson::to_document(&payload)?;
    let updated = state.content.upsert_singleton(T::KEY, doc).await?;
    Ok(Json(updated))
}

/// `PUT /api/featured-rail` accepts any JSON object unchecked.
pub async fn put_featured_rail(
    State(state): State<AppState>,
    payload: Result<Json<ContentDocument>, JsonRejection>,
) -> Result<Json<ContentDocument>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Json parse error: {}", e.body_text()))
    })?;

    let doc = from_content_document(payload)?;
    let updated = state
        .content
        .upsert_singleton(<FeaturedRail as ContentShape>::KEY, doc)
        .await?;
    Ok(Json(updated))
}
