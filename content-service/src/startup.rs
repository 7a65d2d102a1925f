//! Application startup and lifecycle management.

use crate::config::{ContentConfig, StoreBackend, StoreConfig};
use crate::handlers;
use crate::models::{Campaign, FeaturedRail, HeroPayload, NavigationPayload, Promo, ShopTheLook};
use crate::services::{ContentStore, InMemoryContentStore, MongoDb, SingletonAccessor};
use axum::{
    middleware::from_fn,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors_layer, metrics_middleware, request_id_middleware, security_headers_middleware,
    REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ContentConfig,
    pub content: SingletonAccessor,
}

impl AppState {
    pub fn new(config: ContentConfig, store: Option<Arc<dyn ContentStore>>) -> Self {
        Self {
            config,
            content: SingletonAccessor::new(store),
        }
    }
}

/// Resolves the store handle. Any failure leaves it unset so the service
/// keeps serving defaults instead of refusing to start.
pub async fn connect_store(config: &StoreConfig) -> Option<Arc<dyn ContentStore>> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory content store");
            Some(Arc::new(InMemoryContentStore::new()))
        }
        StoreBackend::Mongo => {
            let (Some(uri), Some(database)) = (&config.uri, &config.database) else {
                tracing::warn!(
                    "DATABASE_URL or DATABASE_NAME not set; serving defaults without persistence"
                );
                return None;
            };

            let db = match MongoDb::connect(uri, database).await {
                Ok(db) => db,
                Err(e) => {
                    tracing::warn!("MongoDB unavailable ({}); serving defaults without persistence", e);
                    return None;
                }
            };

            if let Err(e) = db.health_check().await {
                tracing::warn!("MongoDB ping failed ({}); serving defaults without persistence", e);
                return None;
            }

            if let Err(e) = db.initialize_indexes().await {
                tracing::warn!("Continuing without content indexes: {}", e);
            }

            Some(Arc::new(db))
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.allowed_origins);

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/test", get(handlers::diagnostics))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(
            "/api/config/promo",
            get(handlers::get_content::<Promo>).put(handlers::put_content::<Promo>),
        )
        .route(
            "/api/navigation",
            get(handlers::get_content::<NavigationPayload>)
                .put(handlers::put_content::<NavigationPayload>),
        )
        .route("/api/collections", get(handlers::list_collections))
        .route(
            "/api/hero",
            get(handlers::get_content::<HeroPayload>).put(handlers::put_content::<HeroPayload>),
        )
        .route(
            "/api/featured-rail",
            get(handlers::get_content::<FeaturedRail>).put(handlers::put_featured_rail),
        )
        .route(
            "/api/campaign",
            get(handlers::get_content::<Campaign>).put(handlers::put_content::<Campaign>),
        )
        .route(
            "/api/shop-the-look",
            get(handlers::get_content::<ShopTheLook>).put(handlers::put_content::<ShopTheLook>),
        )
        .route("/api/search", get(handlers::search))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            },
        ))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    pub async fn build(config: ContentConfig) -> Result<Self, AppError> {
        let store = connect_store(&config.store).await;
        let state = AppState::new(config.clone(), store);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            degraded = state.content.is_degraded(),
            "Content service listening on port {}",
            port
        );

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
