use crate::registry::ContentKey;
use crate::services::store::ContentStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{ClientOptions, FindOneOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;
use std::time::Duration;

/// Upper bound on server selection, so an unreachable store is detected
/// at startup instead of hanging the first request.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        options.app_name = Some("content-service".to_string());

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client created");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for content-service");

        // Lookup index only: slugs are meant to be unique but that is not enforced.
        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(
                IndexOptions::builder()
                    .name("slug_lookup".to_string())
                    .build(),
            )
            .build();

        self.collection(ContentKey::Collection.collection_name())
            .create_index(slug_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create slug index on collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on collection.slug");

        Ok(())
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

fn inserted_object_id(id: mongodb::bson::Bson) -> Result<ObjectId, AppError> {
    id.as_object_id().ok_or_else(|| {
        AppError::DatabaseError(anyhow::anyhow!(
            "Store returned a non-ObjectId identifier: {}",
            id
        ))
    })
}

#[async_trait]
impl ContentStore for MongoDb {
    async fn find_most_recent(&self, collection: &str) -> Result<Option<Document>, AppError> {
        let options = FindOneOptions::builder().sort(doc! { "_id": -1 }).build();
        Ok(self
            .collection(collection)
            .find_one(doc! {}, options)
            .await?)
    }

    async fn find_first(&self, collection: &str) -> Result<Option<Document>, AppError> {
        Ok(self.collection(collection).find_one(doc! {}, None).await?)
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<Document>, AppError> {
        Ok(self
            .collection(collection)
            .find_one(doc! { "_id": id }, None)
            .await?)
    }

    async fn insert(&self, collection: &str, doc: Document) -> Result<ObjectId, AppError> {
        let result = self.collection(collection).insert_one(doc, None).await?;
        inserted_object_id(result.inserted_id)
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> Result<Vec<ObjectId>, AppError> {
        if docs.is_empty() {
            return Ok(Vec::new());
        }

        let result = self.collection(collection).insert_many(docs, None).await?;
        let mut indexed: Vec<_> = result.inserted_ids.into_iter().collect();
        indexed.sort_by_key(|(index, _)| *index);
        indexed
            .into_iter()
            .map(|(_, id)| inserted_object_id(id))
            .collect()
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        mut fields: Document,
    ) -> Result<(), AppError> {
        fields.remove("_id");
        // `$set` rejects an empty document.
        if fields.is_empty() {
            return Ok(());
        }

        self.collection(collection)
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await?;
        Ok(())
    }

    async fn count(&self, collection: &str) -> Result<u64, AppError> {
        Ok(self
            .collection(collection)
            .count_documents(doc! {}, None)
            .await?)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let cursor = self.collection(collection).find(doc! {}, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.db.list_collection_names(None).await?)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
