//! Card display variants and their badges.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::recency::RecencyCheck;
use crate::theme::ColorToken;

/// Display mode of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Released within the recency window.
    NewRelease,
    /// Has a sale price. Wins over `NewRelease`.
    OnSale,
    #[default]
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::NewRelease => "new-release",
            Variant::OnSale => "on-sale",
            Variant::Default => "default",
        }
    }

    /// Badge shown on the image for this variant, if any.
    pub fn badge(&self) -> Option<Badge> {
        BADGES
            .iter()
            .find(|(variant, _)| variant == self)
            .map(|(_, badge)| *badge)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label pinned to the corner of a card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub background: ColorToken,
    pub foreground: ColorToken,
}

const BADGES: [(Variant, Badge); 2] = [
    (
        Variant::OnSale,
        Badge {
            label: "Sale",
            background: ColorToken::Primary,
            foreground: ColorToken::White,
        },
    ),
    (
        Variant::NewRelease,
        Badge {
            label: "Just released!",
            background: ColorToken::Secondary,
            foreground: ColorToken::White,
        },
    ),
];

/// Pick the variant for a listing.
///
/// Any sale price, zero included, selects `OnSale`. Recency is only consulted
/// when there is no sale price.
pub fn resolve_variant(
    sale_price: Option<Money>,
    release_date: DateTime<Utc>,
    recency: &RecencyCheck,
) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if recency.is_new(release_date) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use crate::recency::RecencyWindow;
    use chrono::{Duration, TimeZone};

    fn recency() -> RecencyCheck {
        RecencyCheck::new(
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
            RecencyWindow::default(),
        )
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        recency().now() - Duration::days(days)
    }

    #[test]
    fn test_sale_price_selects_on_sale() {
        let sale = Some(Money::new(8000, Currency::USD));
        assert_eq!(resolve_variant(sale, days_ago(730), &recency()), Variant::OnSale);
    }

    #[test]
    fn test_zero_sale_price_selects_on_sale() {
        let sale = Some(Money::zero(Currency::USD));
        assert_eq!(resolve_variant(sale, days_ago(1825), &recency()), Variant::OnSale);
    }

    #[test]
    fn test_sale_beats_new_release() {
        let sale = Some(Money::new(8000, Currency::USD));
        assert_eq!(resolve_variant(sale, days_ago(2), &recency()), Variant::OnSale);
    }

    #[test]
    fn test_recent_release() {
        assert_eq!(resolve_variant(None, days_ago(10), &recency()), Variant::NewRelease);
    }

    #[test]
    fn test_default() {
        assert_eq!(resolve_variant(None, days_ago(1825), &recency()), Variant::Default);
    }

    #[test]
    fn test_badge_table() {
        let sale = Variant::OnSale.badge().unwrap();
        assert_eq!(sale.label, "Sale");
        assert_eq!(sale.background, ColorToken::Primary);

        let new = Variant::NewRelease.badge().unwrap();
        assert_eq!(new.label, "Just released!");
        assert_eq!(new.background, ColorToken::Secondary);

        assert_eq!(Variant::Default.badge(), None);
    }

    #[test]
    fn test_variant_names() {
        for variant in [Variant::NewRelease, Variant::OnSale, Variant::Default] {
            assert_eq!(variant.to_string(), variant.as_str());
        }
        assert_eq!(
            serde_json::to_string(&Variant::NewRelease).unwrap(),
            "\"new-release\""
        );
    }
}
