#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use content_service::config::{ContentConfig, CorsConfig, StoreBackend, StoreConfig};
use content_service::services::{ContentStore, InMemoryContentStore, MongoDb};
use content_service::startup::{build_router, AppState, Application};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;
use uuid::Uuid;

pub fn test_config(backend: StoreBackend) -> ContentConfig {
    ContentConfig {
        common: CoreConfig { port: 0 },
        store: StoreConfig {
            backend,
            uri: None,
            database: None,
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
        log_level: "error".to_string(),
        otlp_endpoint: None,
    }
}

/// Router under test plus a handle on the store behind it, if any.
pub struct TestApp {
    pub router: Router,
    pub store: Option<Arc<dyn ContentStore>>,
    /// Set only for apps backed by a live MongoDB test database.
    pub mongo: Option<MongoTarget>,
}

pub struct MongoTarget {
    pub uri: String,
    pub db_name: String,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// App backed by a fresh in-memory store.
    pub fn spawn() -> Self {
        let store: Arc<dyn ContentStore> = Arc::new(InMemoryContentStore::new());
        let state = AppState::new(test_config(StoreBackend::Memory), Some(store.clone()));

        TestApp {
            router: build_router(state),
            store: Some(store),
            mongo: None,
        }
    }

    /// App backed by a fresh database on the MongoDB at `MONGODB_URI`
    /// (default `mongodb://localhost:27017`). Call `cleanup` when done.
    pub async fn spawn_mongo() -> Self {
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = format!("content_test_{}", Uuid::new_v4().simple());

        let db = MongoDb::connect(&uri, &db_name)
            .await
            .expect("Failed to connect to MongoDB");
        db.health_check().await.expect("MongoDB is not reachable");
        db.initialize_indexes()
            .await
            .expect("Failed to initialize indexes");

        let mut config = test_config(StoreBackend::Mongo);
        config.store.uri = Some(uri.clone());
        config.store.database = Some(db_name.clone());

        let store: Arc<dyn ContentStore> = Arc::new(db);
        let state = AppState::new(config, Some(store.clone()));

        TestApp {
            router: build_router(state),
            store: Some(store),
            mongo: Some(MongoTarget { uri, db_name }),
        }
    }

    /// App running with no store at all.
    pub fn spawn_degraded() -> Self {
        let state = AppState::new(test_config(StoreBackend::Mongo), None);

        TestApp {
            router: build_router(state),
            store: None,
            mongo: None,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }

        let response = self
            .router
            .clone()
            .oneshot(
                builder
                    .body(body.map(Body::from).unwrap_or_else(Body::empty))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body.to_string())).await
    }

    pub async fn put_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.request(Method::PUT, uri, Some(body.to_string())).await
    }

    pub fn store(&self) -> &Arc<dyn ContentStore> {
        self.store.as_ref().expect("App has no store")
    }

    /// Drops the MongoDB test database, if any.
    pub async fn cleanup(&self) {
        if let Some(target) = &self.mongo {
            let client = mongodb::Client::with_uri_str(&target.uri)
                .await
                .expect("Failed to connect to MongoDB");
            let _ = client.database(&target.db_name).drop(None).await;
        }
    }

    /// Number of stored documents in `collection`; zero when degraded.
    pub async fn count(&self, collection: &str) -> u64 {
        match &self.store {
            Some(store) => store.count(collection).await.unwrap(),
            None => 0,
        }
    }
}

/// Binds a real listener on a random port and serves the app in the
/// background. Returns the base address.
pub async fn spawn_server() -> String {
    let app = Application::build(test_config(StoreBackend::Memory))
        .await
        .expect("Failed to build test application");
    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    // Wait for the server to accept connections by polling the health endpoint
    let client = reqwest::Client::new();
    let health_url = format!("{}/health", address);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }

    address
}
