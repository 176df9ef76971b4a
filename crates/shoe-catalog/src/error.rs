//! Catalog error types.

use thiserror::Error;

/// Errors raised while turning listing records into listings.
///
/// Card rendering itself never fails; these come from the parsing edge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A listing without a slug cannot be linked to.
    #[error("Listing slug is empty")]
    EmptySlug,

    /// List price below zero.
    #[error("Negative price for {slug}: {amount_minor}")]
    NegativePrice { slug: String, amount_minor: i64 },

    /// Release date is neither `YYYY-MM-DD` nor RFC 3339.
    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),

    /// Malformed serialized listings.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
