use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Hotspot placement as percentages of the look image. Keys other than
/// `x` and `y` are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct HotspotPosition {
    #[validate(range(min = 0.0, max = 100.0, message = "x must be between 0 and 100"))]
    pub x: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "y must be between 0 and 100"))]
    pub y: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, f64>,
}

impl HotspotPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct HotspotProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[validate(nested)]
    pub position: HotspotPosition,
}

/// Shoppable lifestyle image with product hotspots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ShopTheLook {
    pub image: String,
    #[validate(nested)]
    pub hotspots: Vec<HotspotProduct>,
}
