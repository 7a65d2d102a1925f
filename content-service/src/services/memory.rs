use crate::services::store::ContentStore;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local store. Each collection is an ordered vector, so "most
/// recent" is simply the last element.
#[derive(Default)]
pub struct InMemoryContentStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<Document>>>, AppError> {
        self.collections.lock().map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("In-memory store mutex poisoned: {}", e))
        })
    }

    fn assign_id(doc: &mut Document) -> ObjectId {
        match doc.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                doc.insert("_id", id);
                id
            }
        }
    }
}

fn has_id(doc: &Document, id: ObjectId) -> bool {
    doc.get_object_id("_id").map(|d| d == id).unwrap_or(false)
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn find_most_recent(&self, collection: &str) -> Result<Option<Document>, AppError> {
        Ok(self
            .lock()?
            .get(collection)
            .and_then(|docs| docs.last().cloned()))
    }

    async fn find_first(&self, collection: &str) -> Result<Option<Document>, AppError> {
        Ok(self
            .lock()?
            .get(collection)
            .and_then(|docs| docs.first().cloned()))
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, AppError> {
        Ok(self
            .lock()?
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| has_id(d, id)).cloned()))
    }

    async fn insert(&self, collection: &str, mut doc: Document) -> Result<ObjectId, AppError> {
        let id = Self::assign_id(&mut doc);
        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        Ok(id)
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<Vec<ObjectId>, AppError> {
        let mut guard = self.lock()?;
        let stored = guard.entry(collection.to_string()).or_default();
        let mut ids = Vec::with_capacity(docs.len());
        for mut doc in docs {
            ids.push(Self::assign_id(&mut doc));
            stored.push(doc);
        }
        Ok(ids)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<(), AppError> {
        let mut guard = self.lock()?;
        // Matching nothing is not an error, same as an update with no hits.
        if let Some(doc) = guard
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| has_id(d, id)))
        {
            for (key, value) in fields {
                if key != "_id" {
                    doc.insert(key, value);
                }
            }
        }
        Ok(())
    }

    async fn count(&self, collection: &str) -> Result<u64, AppError> {
        Ok(self
            .lock()?
            .get(collection)
            .map(|docs| docs.len() as u64)
            .unwrap_or(0))
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        Ok(self.lock()?.get(collection).cloned().unwrap_or_default())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let mut names: Vec<String> = self
            .lock()?
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
