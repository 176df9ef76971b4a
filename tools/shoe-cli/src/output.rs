//! Output formatting for the CLI.

use anyhow::{Context as _, Result};
use console::style;
use shoe_catalog::variant::Variant;

/// Output handler for CLI messages.
///
/// Status lines go to stderr so rendered cards on stdout stay pipeable.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
        println!("{}", json);
        Ok(())
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Variant name colored like its badge.
pub fn variant_badge(variant: Variant) -> String {
    match variant {
        Variant::OnSale => style(variant.as_str()).magenta().to_string(),
        Variant::NewRelease => style(variant.as_str()).blue().to_string(),
        Variant::Default => style(variant.as_str()).dim().to_string(),
    }
}
