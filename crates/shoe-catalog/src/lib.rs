//! Shoe listing cards.
//!
//! This crate turns shoe listings into card view models:
//!
//! - **Listing**: `ShoeListing` and its serialized `ListingRecord`
//! - **Variant**: on-sale / new-release / default selection and badges
//! - **Card**: `CardRenderer` producing a paint-agnostic `CardView`
//! - **Helpers**: price formatting, pluralization, release recency, theme tokens
//!
//! # Example
//!
//! ```rust
//! use shoe_catalog::prelude::*;
//! use chrono::{Duration, Utc};
//!
//! let now = Utc::now();
//! let listing = ShoeListing {
//!     slug: "tail-wind".to_string(),
//!     name: "Tail Wind".to_string(),
//!     image_src: "/assets/tail-wind.jpg".to_string(),
//!     price: Money::new(16500, Currency::USD),
//!     sale_price: None,
//!     release_date: now - Duration::days(3),
//!     num_of_colors: 2,
//! };
//!
//! let card = CardRenderer::new(RecencyCheck::new(now, RecencyWindow::default()))
//!     .render(&listing);
//! assert_eq!(card.variant, Variant::NewRelease);
//! assert_eq!(card.badge.unwrap().label, "Just released!");
//! ```

pub mod card;
pub mod error;
pub mod listing;
pub mod money;
pub mod recency;
pub mod text;
pub mod theme;
pub mod variant;

pub use card::{render_card, CardRenderer, CardView};
pub use error::CatalogError;
pub use listing::{ListingIssue, ListingRecord, ShoeListing};
pub use money::{format_price, Currency, Money};
pub use variant::{resolve_variant, Badge, Variant};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{
        render_card, CardRenderer, CardView, ImageBlock, PriceLabel, Spacer, TextLabel,
    };
    pub use crate::error::CatalogError;
    pub use crate::listing::{ListingIssue, ListingRecord, ShoeListing};
    pub use crate::money::{format_price, Currency, Money};
    pub use crate::recency::{
        is_new_shoe, parse_release_date, Clock, FixedClock, RecencyCheck, RecencyWindow,
        SystemClock,
    };
    pub use crate::text::pluralize;
    pub use crate::theme::{ColorToken, Weight};
    pub use crate::variant::{resolve_variant, Badge, Variant};
}
