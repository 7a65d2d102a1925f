use serde::{Deserialize, Serialize};
use validator::Validate;

/// Site-wide promo banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Promo {
    pub message: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
}

fn default_active() -> bool {
    true
}

fn default_background() -> String {
    "#e6f4f1".to_string()
}

fn default_text_color() -> String {
    "#0b3d3a".to_string()
}

impl Promo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            active: default_active(),
            background: default_background(),
            text_color: default_text_color(),
        }
    }
}
