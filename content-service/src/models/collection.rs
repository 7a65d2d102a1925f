use serde::{Deserialize, Serialize};

/// A product collection tile. `slug` is expected to be unique but the store
/// does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Collection {
    pub fn new(name: &str, slug: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
            description: None,
            image: Some(image.to_string()),
        }
    }
}
