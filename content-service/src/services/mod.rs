pub mod database;
pub mod memory;
pub mod metrics;
pub mod search;
pub mod singleton;
pub mod store;

pub use database::MongoDb;
pub use memory::InMemoryContentStore;
pub use metrics::{get_metrics, init_metrics};
pub use search::{match_collections, normalize_query, SearchResult};
pub use singleton::{ContentDocument, SingletonAccessor};
pub use store::ContentStore;
