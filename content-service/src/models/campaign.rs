use serde::{Deserialize, Serialize};
use validator::Validate;

/// Campaign banner shown mid-page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Campaign {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default = "default_cta_label")]
    pub cta_label: String,
    #[serde(default = "default_cta_href")]
    pub cta_href: String,
    pub image: String,
}

fn default_cta_label() -> String {
    "Explore".to_string()
}

fn default_cta_href() -> String {
    "/collections/spring-preview".to_string()
}
