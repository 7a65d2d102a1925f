use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::error::AppError;

/// Document-store operations the content accessor relies on.
///
/// Every method addresses a named collection. Implementations must keep
/// `find_most_recent` consistent with insertion order: the document inserted
/// last is the most recent one.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn find_most_recent(&self, collection: &str) -> Result<Option<Document>, AppError>;

    async fn find_first(&self, collection: &str) -> Result<Option<Document>, AppError>;

    async fn find_by_id(&self, collection: &str, id: ObjectId)
        -> Result<Option<Document>, AppError>;

    /// Inserts `doc`, assigning an `_id` when it has none, and returns the id.
    async fn insert(&self, collection: &str, doc: Document) -> Result<ObjectId, AppError>;

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<Vec<ObjectId>, AppError>;

    /// Sets each top-level field of `fields` on the document with `id`.
    /// Fields absent from `fields` are left as stored.
    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<(), AppError>;

    async fn count(&self, collection: &str) -> Result<u64, AppError>;

    /// All documents of a collection in store-native order.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
