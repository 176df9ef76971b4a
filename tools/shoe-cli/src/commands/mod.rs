//! CLI command implementations.

pub mod check;
pub mod config;
pub mod render;
pub mod variant;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use shoe_catalog::recency::{
    parse_release_date, FixedClock, RecencyCheck, RecencyWindow, SystemClock,
};

use crate::config::OutputFormat;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Listings file (JSON array or TOML `[[listing]]` tables).
    pub listings: String,

    /// Output format (default from config).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Evaluate recency as of this date instead of now.
    #[arg(long)]
    pub now: Option<String>,

    /// Write to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the variant command.
#[derive(Args)]
pub struct VariantArgs {
    /// Sale price in minor units (0 is a valid sale price).
    #[arg(long)]
    pub sale_price: Option<i64>,

    /// Release date (YYYY-MM-DD or RFC 3339).
    #[arg(long)]
    pub release_date: String,

    /// Evaluate recency as of this date instead of now.
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Listings file to check.
    pub listings: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Create shoecard.toml in the current directory.
    Init {
        /// Overwrite without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Recency check for this run: `--now` when given, else the wall clock.
pub(crate) fn recency_for(now: Option<&str>, window: RecencyWindow) -> Result<RecencyCheck> {
    match now {
        Some(date) => {
            let now: DateTime<Utc> =
                parse_release_date(date).with_context(|| format!("Invalid --now: {}", date))?;
            Ok(RecencyCheck::from_clock(&FixedClock(now), window))
        }
        None => Ok(RecencyCheck::from_clock(&SystemClock, window)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_recency_for_pinned_now() {
        let recency = recency_for(Some("2024-06-15"), RecencyWindow::days(7)).unwrap();
        assert_eq!(
            recency.now(),
            Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
        );
        assert!(recency.is_new(Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap()));
        assert!(!recency.is_new(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_recency_for_invalid_now() {
        let err = recency_for(Some("next tuesday"), RecencyWindow::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid --now: next tuesday"));
    }

    #[test]
    fn test_recency_for_wall_clock() {
        let before = Utc::now();
        let recency = recency_for(None, RecencyWindow::default()).unwrap();
        assert!(recency.now() >= before);
    }
}
