//! Card view models.
//!
//! [`CardRenderer`] turns a [`ShoeListing`] into a [`CardView`]: a description
//! of what the card shows, independent of how it gets painted.

use serde::Serialize;

use crate::listing::ShoeListing;
use crate::money::format_price;
use crate::recency::RecencyCheck;
use crate::text::pluralize;
use crate::theme::{ColorToken, Weight};
use crate::variant::{resolve_variant, Badge, Variant};

/// Default prefix for shoe detail links.
pub const DEFAULT_LINK_BASE: &str = "/shoe/";

/// Gap between the image and the text rows.
pub const IMAGE_SPACING: u32 = 12;

/// Everything a painter needs to draw one card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// Detail page link target.
    pub href: String,
    pub variant: Variant,
    pub image: ImageBlock,
    /// Present unless the variant is `Default`.
    pub badge: Option<Badge>,
    pub spacer: Spacer,
    pub name: TextLabel,
    /// List price, struck through when on sale.
    pub price: PriceLabel,
    pub color_info: TextLabel,
    /// Present only when on sale.
    pub sale_price: Option<PriceLabel>,
}

impl CardView {
    pub fn is_sale(&self) -> bool {
        self.variant == Variant::OnSale
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    pub src: String,
    pub alt: String,
    pub variant: Variant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spacer {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLabel {
    pub text: String,
    pub weight: Weight,
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLabel {
    pub text: String,
    pub weight: Weight,
    /// `None` inherits the surrounding text color.
    pub color: Option<ColorToken>,
    pub struck_through: bool,
}

/// Builds card views against a fixed "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRenderer {
    recency: RecencyCheck,
    link_base: String,
}

impl CardRenderer {
    pub fn new(recency: RecencyCheck) -> Self {
        Self {
            recency,
            link_base: DEFAULT_LINK_BASE.to_string(),
        }
    }

    /// Set the detail link prefix. A trailing slash is added when missing.
    pub fn with_link_base(mut self, link_base: impl Into<String>) -> Self {
        let mut link_base = link_base.into();
        if !link_base.ends_with('/') {
            link_base.push('/');
        }
        self.link_base = link_base;
        self
    }

    pub fn recency(&self) -> &RecencyCheck {
        &self.recency
    }

    pub fn link_base(&self) -> &str {
        &self.link_base
    }

    pub fn variant_of(&self, listing: &ShoeListing) -> Variant {
        resolve_variant(listing.sale_price, listing.release_date, &self.recency)
    }

    pub fn render(&self, listing: &ShoeListing) -> CardView {
        let variant = self.variant_of(listing);
        let is_sale = variant == Variant::OnSale;

        let price = PriceLabel {
            text: format_price(listing.price),
            weight: Weight::Normal,
            color: is_sale.then_some(ColorToken::Gray500),
            struck_through: is_sale,
        };

        // The storefront shows the list price here too, not `sale_price`.
        let sale_price = is_sale.then(|| PriceLabel {
            text: format_price(listing.price),
            weight: Weight::Medium,
            color: Some(ColorToken::Primary),
            struck_through: false,
        });

        CardView {
            href: format!("{}{}", self.link_base, listing.slug),
            variant,
            image: ImageBlock {
                src: listing.image_src.clone(),
                alt: String::new(),
                variant,
            },
            badge: variant.badge(),
            spacer: Spacer {
                size: IMAGE_SPACING,
            },
            name: TextLabel {
                text: listing.name.clone(),
                weight: Weight::Medium,
                color: ColorToken::Gray900,
            },
            price,
            color_info: TextLabel {
                text: pluralize("Color", listing.num_of_colors),
                weight: Weight::Normal,
                color: ColorToken::Gray700,
            },
            sale_price,
        }
    }

    pub fn render_all(&self, listings: &[ShoeListing]) -> Vec<CardView> {
        listings.iter().map(|listing| self.render(listing)).collect()
    }
}

/// Render one card with the default link base.
pub fn render_card(listing: &ShoeListing, recency: &RecencyCheck) -> CardView {
    CardRenderer::new(*recency).render(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use crate::recency::RecencyWindow;
    use chrono::{Duration, TimeZone, Utc};

    fn recency() -> RecencyCheck {
        RecencyCheck::new(
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
            RecencyWindow::default(),
        )
    }

    fn listing(sale_price: Option<i64>, days_old: i64) -> ShoeListing {
        ShoeListing {
            slug: "tail-wind".to_string(),
            name: "Tail Wind".to_string(),
            image_src: "/assets/tail-wind.jpg".to_string(),
            price: Money::new(10000, Currency::USD),
            sale_price: sale_price.map(|amount| Money::new(amount, Currency::USD)),
            release_date: recency().now() - Duration::days(days_old),
            num_of_colors: 3,
        }
    }

    #[test]
    fn test_link_and_image() {
        let card = render_card(&listing(None, 400), &recency());
        assert_eq!(card.href, "/shoe/tail-wind");
        assert_eq!(card.image.src, "/assets/tail-wind.jpg");
        assert_eq!(card.image.alt, "");
        assert_eq!(card.image.variant, Variant::Default);
        assert_eq!(card.spacer.size, 12);
    }

    #[test]
    fn test_custom_link_base() {
        let renderer = CardRenderer::new(recency()).with_link_base("/products");
        assert_eq!(renderer.link_base(), "/products/");
        assert_eq!(renderer.render(&listing(None, 400)).href, "/products/tail-wind");
    }

    #[test]
    fn test_sale_card() {
        let card = render_card(&listing(Some(8000), 400), &recency());
        assert!(card.is_sale());
        assert_eq!(card.badge.map(|b| b.label), Some("Sale"));
        assert!(card.price.struck_through);
        assert_eq!(card.price.color, Some(ColorToken::Gray500));
        assert!(card.sale_price.is_some());
    }

    #[test]
    fn test_sale_label_repeats_list_price() {
        // Pins current storefront output: the secondary label shows the list
        // price ($100.00) rather than the sale price ($80.00).
        let card = render_card(&listing(Some(8000), 400), &recency());
        let sale_label = card.sale_price.unwrap();
        assert_eq!(sale_label.text, "$100.00");
        assert_eq!(sale_label.text, card.price.text);
        assert_eq!(sale_label.color, Some(ColorToken::Primary));
        assert_eq!(sale_label.weight, Weight::Medium);
    }

    #[test]
    fn test_new_release_card() {
        let card = render_card(&listing(None, 10), &recency());
        assert_eq!(card.variant, Variant::NewRelease);
        assert_eq!(card.badge.map(|b| b.label), Some("Just released!"));
        assert!(!card.price.struck_through);
        assert_eq!(card.price.color, None);
        assert!(card.sale_price.is_none());
    }

    #[test]
    fn test_default_card_has_no_badge() {
        let card = render_card(&listing(None, 400), &recency());
        assert_eq!(card.variant, Variant::Default);
        assert!(card.badge.is_none());
        assert!(card.sale_price.is_none());
    }

    #[test]
    fn test_badge_iff_not_default() {
        for (sale, age) in [(Some(0), 1), (Some(50), 900), (None, 5), (None, 900)] {
            let card = render_card(&listing(sale, age), &recency());
            assert_eq!(card.badge.is_some(), card.variant != Variant::Default);
            assert_eq!(card.sale_price.is_some(), card.is_sale());
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let item = listing(None, 10);
        assert_eq!(render_card(&item, &recency()), render_card(&item, &recency()));
    }

    #[test]
    fn test_card_json_shape() {
        let card = render_card(&listing(Some(8000), 400), &recency());
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["variant"], "on-sale");
        assert_eq!(json["badge"]["label"], "Sale");
        assert_eq!(json["badge"]["background"], "primary");
        assert_eq!(json["color_info"]["text"], "3 Colors");
    }
}
