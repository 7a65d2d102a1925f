//! Get-or-seed and merge-set upsert over one-document-per-key content.

use crate::registry::ContentKey;
use crate::services::metrics::{record_degraded, record_seed, record_upsert};
use crate::services::store::ContentStore;
use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};
use service_core::error::AppError;
use std::sync::Arc;

/// A content document as returned to callers: a JSON object whose `_id`,
/// when present, is the store identifier rendered as a hex string.
pub type ContentDocument = Map<String, Value>;

/// Converts a stored document into its response form.
pub fn to_content_document(mut doc: Document) -> ContentDocument {
    if let Ok(id) = doc.get_object_id("_id") {
        doc.insert("_id", id.to_hex());
    }

    match Bson::Document(doc).into_relaxed_extjson() {
        Value::Object(map) => map,
        // A BSON document always renders as a JSON object.
        _ => Map::new(),
    }
}

/// Converts an incoming JSON object into a storable document.
pub fn from_content_document(payload: ContentDocument) -> Result<Document, AppError> {
    mongodb::bson::to_document(&payload).map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Payload cannot be stored: {}", e))
    })
}

/// Accessor over the optional process-wide store handle. With no store the
/// accessor runs in degraded mode: reads return defaults and writes echo the
/// payload, nothing is persisted.
#[derive(Clone, Default)]
pub struct SingletonAccessor {
    store: Option<Arc<dyn ContentStore>>,
}

impl SingletonAccessor {
    pub fn new(store: Option<Arc<dyn ContentStore>>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Option<&Arc<dyn ContentStore>> {
        self.store.as_ref()
    }

    pub fn is_degraded(&self) -> bool {
        self.store.is_none()
    }

    /// Returns the most recently inserted document for `key`, seeding the
    /// collection with `default` when it is empty.
    ///
    /// The seed is not atomic: two concurrent first reads may both insert the
    /// default. Later reads then pick the newest copy, which is equivalent.
    #[tracing::instrument(skip(self, key, default), fields(key = %key))]
    pub async fn get_singleton(
        &self,
        key: ContentKey,
        default: Document,
    ) -> Result<ContentDocument, AppError> {
        let Some(store) = &self.store else {
            tracing::debug!("No store configured, serving default");
            record_degraded(key, "read");
            return Ok(to_content_document(default));
        };

        let collection = key.collection_name();
        match store.find_most_recent(collection).await? {
            Some(doc) => Ok(to_content_document(doc)),
            None => {
                store.insert(collection, default.clone()).await?;
                tracing::info!("Seeded default content");
                record_seed(key);
                Ok(to_content_document(default))
            }
        }
    }

    /// Merge-sets `payload` onto the existing document for `key`, or inserts it
    /// when the collection is empty. Fields missing from `payload` keep their
    /// stored values. The payload must already be validated.
    #[tracing::instrument(skip(self, key, payload), fields(key = %key))]
    pub async fn upsert_singleton(
        &self,
        key: ContentKey,
        mut payload: Document,
    ) -> Result<ContentDocument, AppError> {
        let Some(store) = &self.store else {
            tracing::debug!("No store configured, echoing payload");
            record_degraded(key, "write");
            return Ok(to_content_document(payload));
        };

        let collection = key.collection_name();
        payload.remove("_id");

        let id = match store.find_first(collection).await? {
            Some(existing) => {
                let id = existing.get_object_id("_id").map_err(|e| {
                    AppError::DatabaseError(anyhow::anyhow!(
                        "Stored {} document has no ObjectId: {}",
                        collection,
                        e
                    ))
                })?;
                store.update_by_id(collection, id, payload).await?;
                tracing::info!(id = %id, "Merged content update");
                record_upsert(key, "merge");
                id
            }
            None => {
                let id = store.insert(collection, payload).await?;
                tracing::info!(id = %id, "Inserted content");
                record_upsert(key, "insert");
                id
            }
        };

        let updated = store.find_by_id(collection, id).await?.ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "{} document {} vanished after write",
                collection,
                id
            ))
        })?;

        Ok(to_content_document(updated))
    }

    /// Returns every stored collection entry, bulk-seeding `defaults` once
    /// when the backing collection is empty.
    #[tracing::instrument(skip(self, defaults))]
    pub async fn get_collection_list(
        &self,
        defaults: Vec<Document>,
    ) -> Result<Vec<ContentDocument>, AppError> {
        let key = ContentKey::Collection;
        let Some(store) = &self.store else {
            record_degraded(key, "read");
            return Ok(defaults.into_iter().map(to_content_document).collect());
        };

        let collection = key.collection_name();
        if store.count(collection).await? == 0 {
            let seeded = store.insert_many(collection, defaults).await?;
            tracing::info!(count = seeded.len(), "Seeded default collections");
            record_seed(key);
        }

        Ok(store
            .list(collection)
            .await?
            .into_iter()
            .map(to_content_document)
            .collect())
    }
}
