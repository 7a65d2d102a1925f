//! service-core: Shared HTTP infrastructure for the storefront content services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use bson;
pub use mongodb;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;
pub use tracing;
pub use validator;
