//! CLI configuration.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shoe_catalog::money::Currency;
use shoe_catalog::recency::{RecencyWindow, DEFAULT_RECENCY_DAYS};
use shoe_observability::{LogFormat, LogLevel};

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shoecard.toml", ".shoecard.toml", "shoecard.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Rendering settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config content, choosing the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Serialize in the format matching the file extension.
    pub fn to_string_for(&self, path: &str) -> Result<String> {
        if path.ends_with(".json") {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(toml::to_string_pretty(self)?)
        }
    }

    /// Currency listings are priced in.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.catalog.currency)
            .ok_or_else(|| anyhow!("Unknown currency in config: {}", self.catalog.currency))
    }

    pub fn recency_window(&self) -> RecencyWindow {
        RecencyWindow::days(self.catalog.recency_days)
    }
}

/// Catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// ISO currency code for listing prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Days a release counts as new.
    #[serde(default = "default_recency_days")]
    pub recency_days: u32,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_recency_days() -> u32 {
    DEFAULT_RECENCY_DAYS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            recency_days: default_recency_days(),
        }
    }
}

/// How rendered cards are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Card grid fragment.
    #[default]
    Html,
    /// Card view models.
    Json,
    /// Standalone HTML page.
    Page,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Page => "page",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "html" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            "page" => Some(OutputFormat::Page),
            _ => None,
        }
    }
}

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Prefix of shoe detail links.
    #[serde(default = "default_link_base")]
    pub link_base: String,

    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Title of standalone pages.
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_link_base() -> String {
    shoe_catalog::card::DEFAULT_LINK_BASE.to_string()
}

fn default_page_title() -> String {
    "Shoes".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            link_base: default_link_base(),
            format: OutputFormat::default(),
            page_title: default_page_title(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Generate a default shoecard.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Shoe card configuration

[catalog]
currency = "USD"
# Days after release a shoe is shown as "Just released!"
recency_days = {recency_days}

[render]
link_base = "/shoe/"
format = "html"
page_title = "Shoes"

[log]
level = "warn"
format = "human"
"#,
        recency_days = DEFAULT_RECENCY_DAYS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = CliConfig::parse("shoecard.toml", &generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::parse(
            "shoecard.toml",
            "[catalog]\nrecency_days = 7\n\n[render]\nformat = \"json\"\n",
        )
        .unwrap();
        assert_eq!(config.catalog.currency, "USD");
        assert_eq!(config.recency_window(), RecencyWindow::days(7));
        assert_eq!(config.render.format, OutputFormat::Json);
        assert_eq!(config.render.link_base, "/shoe/");
        assert_eq!(config.log.level, LogLevel::Warn);
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            "shoecard.json",
            r#"{"catalog": {"currency": "eur"}, "log": {"level": "debug", "format": "json"}}"#,
        )
        .unwrap();
        assert_eq!(config.currency().unwrap(), Currency::EUR);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_currency() {
        let mut config = CliConfig::default();
        config.catalog.currency = "DOGE".to_string();
        assert!(config.currency().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CliConfig::default();
        config.render.link_base = "/p/".to_string();
        let text = config.to_string_for("shoecard.toml").unwrap();
        assert_eq!(CliConfig::parse("shoecard.toml", &text).unwrap(), config);
    }
}
