use serde::{Deserialize, Serialize};
use validator::Validate;

/// Shape of the seeded featured rail. Writes to this block are free-form
/// JSON objects and are not checked against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FeaturedRail {
    pub items: Vec<FeaturedRailItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedRailItem {
    pub name: String,
    pub slug: String,
    pub image: String,
}
