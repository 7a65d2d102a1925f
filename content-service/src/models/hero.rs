use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_cta_label")]
    pub cta_label: String,
    #[serde(default = "default_cta_href")]
    pub cta_href: String,
    pub image: String,
}

fn default_cta_label() -> String {
    "Shop Collection".to_string()
}

fn default_cta_href() -> String {
    "/collections/all".to_string()
}

/// Hero carousel document: `{ "slides": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct HeroPayload {
    pub slides: Vec<HeroSlide>,
}
