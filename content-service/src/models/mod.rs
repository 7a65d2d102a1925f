//! Validated content shapes served by the storefront API.

pub mod campaign;
pub mod collection;
pub mod featured_rail;
pub mod hero;
pub mod navigation;
pub mod promo;
pub mod shop_the_look;

pub use campaign::Campaign;
pub use collection::Collection;
pub use featured_rail::{FeaturedRail, FeaturedRailItem};
pub use hero::{HeroPayload, HeroSlide};
pub use navigation::{NavigationItem, NavigationPayload, MAX_NAVIGATION_DEPTH};
pub use promo::Promo;
pub use shop_the_look::{HotspotPosition, HotspotProduct, ShopTheLook};
