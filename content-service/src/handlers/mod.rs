pub mod collections;
pub mod content;
pub mod diagnostics;
pub mod health;

pub use collections::{list_collections, search};
pub use content::{get_content, put_content, put_featured_rail};
pub use diagnostics::diagnostics;
pub use health::{health_check, hello, metrics_endpoint, readiness_check, root};
