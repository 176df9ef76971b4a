//! Shoe listings and their serialized record form.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::money::{Currency, Money};
use crate::recency::parse_release_date;

/// A shoe as shown in a listing grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoeListing {
    /// URL-friendly identifier used for the detail page link.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image_src: String,
    /// List price.
    pub price: Money,
    /// Discounted price, present only while the shoe is on sale.
    pub sale_price: Option<Money>,
    /// When the shoe was released.
    pub release_date: DateTime<Utc>,
    /// Number of available colorways.
    pub num_of_colors: u32,
}

/// Serialized listing, prices in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<i64>,
    pub release_date: String,
    #[serde(default)]
    pub num_of_colors: u32,
}

/// Problems the card itself tolerates but a catalog maintainer should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingIssue {
    /// Sale price is not below the list price.
    SaleNotDiscounted { price: Money, sale_price: Money },
    /// Sale price is priced in another currency.
    SaleCurrencyMismatch { price: Currency, sale_price: Currency },
    /// Sale price below zero.
    NegativeSalePrice(Money),
}

impl fmt::Display for ListingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingIssue::SaleNotDiscounted { price, sale_price } => write!(
                f,
                "sale price {} is not below list price {}",
                sale_price, price
            ),
            ListingIssue::SaleCurrencyMismatch { price, sale_price } => write!(
                f,
                "sale price currency {} differs from list price currency {}",
                sale_price, price
            ),
            ListingIssue::NegativeSalePrice(sale_price) => {
                write!(f, "sale price {} is negative", sale_price)
            }
        }
    }
}

impl ShoeListing {
    /// Build a listing from its serialized record, pricing both amounts in `currency`.
    pub fn from_record(record: ListingRecord, currency: Currency) -> Result<Self, CatalogError> {
        if record.slug.trim().is_empty() {
            return Err(CatalogError::EmptySlug);
        }
        if record.price < 0 {
            return Err(CatalogError::NegativePrice {
                slug: record.slug,
                amount_minor: record.price,
            });
        }

        let release_date = parse_release_date(&record.release_date)?;

        Ok(Self {
            slug: record.slug,
            name: record.name,
            image_src: record.image_src,
            price: Money::new(record.price, currency),
            sale_price: record.sale_price.map(|amount| Money::new(amount, currency)),
            release_date,
            num_of_colors: record.num_of_colors,
        })
    }

    /// Caller-side problems with the pricing. Rendering never consults these.
    pub fn issues(&self) -> Vec<ListingIssue> {
        let mut issues = Vec::new();

        if let Some(sale_price) = self.sale_price {
            if sale_price.is_negative() {
                issues.push(ListingIssue::NegativeSalePrice(sale_price));
            }

            match sale_price.try_cmp(&self.price) {
                Some(Ordering::Less) => {}
                Some(_) => issues.push(ListingIssue::SaleNotDiscounted {
                    price: self.price,
                    sale_price,
                }),
                None => issues.push(ListingIssue::SaleCurrencyMismatch {
                    price: self.price.currency,
                    sale_price: sale_price.currency,
                }),
            }
        }

        issues
    }
}

/// Parse a JSON array of listing records.
pub fn parse_listing_records(json: &str) -> Result<Vec<ListingRecord>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
