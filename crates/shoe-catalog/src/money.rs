//! Prices for shoe listings.
//!
//! Amounts are kept in the currency's minor unit (cents for USD) so that
//! list and sale prices compare exactly.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Currencies a listing can be priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// ISO code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Display symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Number of minor-unit digits.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A price in a single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a price from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// A zero price. Still a real price: a zero sale price marks a listing on sale.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Format with symbol (e.g., "$165.00").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        let sign = if self.is_negative() { "-" } else { "" };
        let amount = self.amount_minor.unsigned_abs();
        let divisor = 10_u64.pow(places);
        let whole = amount / divisor;

        if places == 0 {
            return format!("{}{}{}", sign, self.currency.symbol(), whole);
        }

        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency.symbol(),
            whole,
            amount % divisor,
            width = places as usize
        )
    }

    /// Compare two prices, or `None` when the currencies differ.
    pub fn try_cmp(&self, other: &Money) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount_minor.cmp(&other.amount_minor))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a price for a card label.
pub fn format_price(price: Money) -> String {
    price.display()
}
