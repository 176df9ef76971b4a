//! Listing file loading.
//!
//! JSON files hold an array of records; TOML files hold `[[listing]]` tables.

use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Deserialize;
use shoe_catalog::listing::{parse_listing_records, ListingRecord, ShoeListing};
use shoe_catalog::money::Currency;

#[derive(Debug, Deserialize)]
struct TomlListings {
    #[serde(default)]
    listing: Vec<ListingRecord>,
}

/// Parse listing records, choosing the format from the file extension.
pub fn parse_records(path: &Path, content: &str) -> Result<Vec<ListingRecord>> {
    let is_toml = path.extension().map_or(false, |ext| ext == "toml");

    if is_toml {
        let file: TomlListings = toml::from_str(content)
            .with_context(|| format!("Failed to parse TOML listings: {}", path.display()))?;
        Ok(file.listing)
    } else {
        parse_listing_records(content)
            .with_context(|| format!("Failed to parse JSON listings: {}", path.display()))
    }
}

/// Read listing records from a file.
pub async fn read_records(path: &Path) -> Result<Vec<ListingRecord>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read listings file: {}", path.display()))?;
    parse_records(path, &content)
}

/// Read and convert every listing, failing on the first bad record.
pub async fn load_listings(path: &Path, currency: Currency) -> Result<Vec<ShoeListing>> {
    read_records(path)
        .await?
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let slug = record.slug.clone();
            ShoeListing::from_record(record, currency)
                .with_context(|| format!("Invalid listing #{} ({})", i + 1, slug))
        })
        .collect()
}
