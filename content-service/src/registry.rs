//! Catalog of content keys: backing collection, validated shape and the
//! compiled-in default served or seeded when nothing is stored.

use crate::models::{
    Campaign, Collection, FeaturedRail, FeaturedRailItem, HeroPayload, HeroSlide,
    HotspotPosition, HotspotProduct, NavigationItem, NavigationPayload, Promo, ShopTheLook,
};
use mongodb::bson::{self, Document};
use serde::{de::DeserializeOwned, Serialize};
use service_core::error::AppError;
use std::fmt;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKey {
    Promo,
    Navigation,
    Hero,
    FeaturedRail,
    Campaign,
    ShopTheLook,
    Collection,
}

impl ContentKey {
    /// Name of the backing store collection.
    pub fn collection_name(&self) -> &'static str {
        match self {
            ContentKey::Promo => "promo",
            ContentKey::Navigation => "navigation",
            ContentKey::Hero => "hero",
            ContentKey::FeaturedRail => "featured_rail",
            ContentKey::Campaign => "campaign",
            ContentKey::ShopTheLook => "shop_the_look",
            ContentKey::Collection => "collection",
        }
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}

/// A singleton content block with a declared shape and a default value.
pub trait ContentShape: Serialize + DeserializeOwned + Validate + Send + 'static {
    const KEY: ContentKey;

    fn default_value() -> Self;

    fn default_document() -> Result<Document, AppError> {
        Ok(bson::to_document(&Self::default_value())?)
    }
}

impl ContentShape for Promo {
    const KEY: ContentKey = ContentKey::Promo;

    fn default_value() -> Self {
        Promo::new("Reserve Now, Pay Later – Pre-Orders Ship Early February")
    }
}

impl ContentShape for NavigationPayload {
    const KEY: ContentKey = ContentKey::Navigation;

    fn default_value() -> Self {
        use NavigationItem as Nav;

        NavigationPayload {
            items: vec![
                Nav::branch("Stories to Tell", "stories", vec![]),
                Nav::branch(
                    "Bags",
                    "bags",
                    vec![
                        Nav::leaf("Totes", "totes"),
                        Nav::leaf("Crossbody", "crossbody"),
                        Nav::leaf("Pouches", "pouches"),
                    ],
                ),
                Nav::branch(
                    "Home",
                    "home",
                    vec![
                        Nav::leaf("Decor", "decor"),
                        Nav::leaf("Throws", "throws"),
                        Nav::leaf("Tabletop", "tabletop"),
                    ],
                ),
                Nav::branch(
                    "Kitchen",
                    "kitchen",
                    vec![
                        Nav::leaf("Tea Towels", "tea-towels"),
                        Nav::leaf("Aprons", "aprons"),
                        Nav::leaf("Serveware", "serveware"),
                    ],
                ),
                Nav::branch(
                    "Clothing",
                    "clothing",
                    vec![
                        Nav::leaf("Dresses", "dresses"),
                        Nav::leaf("Tops", "tops"),
                        Nav::leaf("Kaftans", "kaftans"),
                    ],
                ),
                Nav::branch(
                    "Eco Living",
                    "eco-living",
                    vec![
                        Nav::leaf("Blu Collection", "blu"),
                        Nav::leaf("Reusable", "reusable"),
                    ],
                ),
                Nav::leaf("All Products", "all"),
                Nav::leaf("Retail Displays", "retail-displays"),
            ],
        }
    }
}

impl ContentShape for HeroPayload {
    const KEY: ContentKey = ContentKey::Hero;

    fn default_value() -> Self {
        HeroPayload {
            slides: vec![
                HeroSlide {
                    title: "Spring '26 Coastal Stories".to_string(),
                    description: Some("Easy, breezy pieces with a coastal soul.".to_string()),
                    cta_label: "Shop Collection".to_string(),
                    cta_href: "/collections/spring-26".to_string(),
                    image: "https://images.unsplash.com/photo-1500375592092-40eb2168fd21?q=80&w=1600&auto=format&fit=crop".to_string(),
                },
                HeroSlide {
                    title: "Eco-Friendly Essentials".to_string(),
                    description: Some(
                        "Blu Collection: recycled, reusable, retailer-loved.".to_string(),
                    ),
                    cta_label: "Shop Blu".to_string(),
                    cta_href: "/collections/blu".to_string(),
                    image: "https://images.unsplash.com/photo-1526403226-eda5ebf4c11b?q=80&w=1600&auto=format&fit=crop".to_string(),
                },
            ],
        }
    }
}

impl ContentShape for FeaturedRail {
    const KEY: ContentKey = ContentKey::FeaturedRail;

    fn default_value() -> Self {
        let item = |name: &str, slug: &str, image: &str| FeaturedRailItem {
            name: name.to_string(),
            slug: slug.to_string(),
            image: image.to_string(),
        };

        FeaturedRail {
            items: vec![
                item("New Dresses", "dresses", "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?q=80&w=1600&auto=format&fit=crop"),
                item("Tabletop", "tabletop", "https://images.unsplash.com/photo-1494869042583-472f78114d3a?q=80&w=1600&auto=format&fit=crop"),
                item("Totes", "totes", "https://images.unsplash.com/photo-1518118432662-7230bc0fdd3f?q=80&w=1600&auto=format&fit=crop"),
                item("Kaftans", "kaftans", "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1600&auto=format&fit=crop"),
            ],
        }
    }
}

impl ContentShape for Campaign {
    const KEY: ContentKey = ContentKey::Campaign;

    fn default_value() -> Self {
        Campaign {
            title: "Spring '26 Preview".to_string(),
            subtitle: Some("Pre-book your bestsellers early.".to_string()),
            cta_label: "Explore Spring '26 Preview".to_string(),
            cta_href: "/collections/spring-26".to_string(),
            image: "https://images.unsplash.com/photo-1501785888041-af3ef285b470?q=80&w=2000&auto=format&fit=crop".to_string(),
        }
    }
}

impl ContentShape for ShopTheLook {
    const KEY: ContentKey = ContentKey::ShopTheLook;

    fn default_value() -> Self {
        let hotspot = |title: &str, price: f64, x: f64, y: f64, image: &str| HotspotProduct {
            product_id: None,
            title: title.to_string(),
            price: Some(price),
            image: Some(image.to_string()),
            position: HotspotPosition::new(x, y),
        };

        ShopTheLook {
            image: "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?q=80&w=2000&auto=format&fit=crop".to_string(),
            hotspots: vec![
                hotspot("Striped Kaftan", 58.0, 28.0, 62.0, "https://images.unsplash.com/photo-1540573133985-87b6da6d54a9?q=80&w=800&auto=format&fit=crop"),
                hotspot("Woven Tote", 24.0, 64.0, 58.0, "https://images.unsplash.com/photo-1520975960015-4f2a09f0b34b?q=80&w=800&auto=format&fit=crop"),
                hotspot("Shell Necklace", 12.0, 52.0, 38.0, "https://images.unsplash.com/photo-1520975682030-00ac1524f5a3?q=80&w=800&auto=format&fit=crop"),
            ],
        }
    }
}

/// The six collections seeded into an empty `collection` store.
pub fn default_collections() -> Vec<Collection> {
    vec![
        Collection::new("Eco Collection", "eco", "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1600&auto=format&fit=crop"),
        Collection::new("Home", "home", "https://images.unsplash.com/photo-1505692794403-34cb7b57d23d?q=80&w=1600&auto=format&fit=crop"),
        Collection::new("Clothing", "clothing", "https://images.unsplash.com/photo-1503342217505-b0a15cf70489?q=80&w=1600&auto=format&fit=crop"),
        Collection::new("Blu Collection", "blu", "https://images.unsplash.com/photo-1520975682030-00ac1524f5a3?q=80&w=1600&auto=format&fit=crop"),
        Collection::new("Bags", "bags", "https://images.unsplash.com/photo-1520975960015-4f2a09f0b34b?q=80&w=1600&auto=format&fit=crop"),
        Collection::new("Kitchen", "kitchen", "https://images.unsplash.com/photo-1526318472351-c75fcf070305?q=80&w=1600&auto=format&fit=crop"),
    ]
}

pub fn default_collection_documents() -> Result<Vec<Document>, AppError> {
    default_collections()
        .iter()
        .map(|c| bson::to_document(c).map_err(AppError::from))
        .collect()
}
