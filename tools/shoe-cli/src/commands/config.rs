//! Configuration management commands.

use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use shoe_catalog::money::Currency;
use shoe_observability::{LogFormat, LogLevel};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, OutputFormat, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config)?;
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.info(&format!("Loaded from {}", path.display())),
        None => ctx.output.info("No config file found, using defaults"),
    }

    println!("[catalog]");
    ctx.output.kv("currency", &ctx.config.catalog.currency);
    ctx.output
        .kv("recency_days", &ctx.config.catalog.recency_days.to_string());

    println!("[render]");
    ctx.output.kv("link_base", &ctx.config.render.link_base);
    ctx.output.kv("format", ctx.config.render.format.as_str());
    ctx.output.kv("page_title", &ctx.config.render.page_title);

    println!("[log]");
    ctx.output.kv("level", &ctx.config.log.level.to_string().to_lowercase());
    ctx.output.kv("format", &format!("{:?}", ctx.config.log.format).to_lowercase());

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        println!("{}", serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = find_config_file(&ctx.cwd)?;

    let content = tokio::fs::read_to_string(&config_path).await?;
    let mut config = CliConfig::parse(&config_path, &content)?;

    set_config_value(&mut config, key, value)?;

    tokio::fs::write(&config_path, config.to_string_for(&config_path)?).await?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            ctx.output.warn("Config init cancelled");
            return Ok(());
        }
    }

    tokio::fs::write(&config_path, generate_default_config()).await?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = validation_findings(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Errors and warnings for a configuration.
fn validation_findings(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if Currency::from_code(&config.catalog.currency).is_none() {
        errors.push(format!(
            "catalog.currency '{}' is not a supported currency",
            config.catalog.currency
        ));
    }

    if config.catalog.recency_days == 0 {
        warnings.push("catalog.recency_days is 0; only future releases count as new".to_string());
    }

    if !config.render.link_base.starts_with('/') && !config.render.link_base.contains("://") {
        errors.push("render.link_base must be absolute ('/...') or a full URL".to_string());
    }

    if config.render.page_title.trim().is_empty() {
        warnings.push("render.page_title is empty".to_string());
    }

    (errors, warnings)
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "currency"] => Ok(config.catalog.currency.clone()),
        ["catalog", "recency_days"] => Ok(config.catalog.recency_days.to_string()),
        ["render", "link_base"] => Ok(config.render.link_base.clone()),
        ["render", "format"] => Ok(config.render.format.as_str().to_string()),
        ["render", "page_title"] => Ok(config.render.page_title.clone()),
        ["log", "level"] => Ok(config.log.level.to_string().to_lowercase()),
        ["log", "format"] => Ok(format!("{:?}", config.log.format).to_lowercase()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "currency"] => {
            if Currency::from_code(value).is_none() {
                bail!("Unknown currency: {}", value);
            }
            config.catalog.currency = value.to_uppercase();
        }
        ["catalog", "recency_days"] => config.catalog.recency_days = value.parse()?,
        ["render", "link_base"] => config.render.link_base = value.to_string(),
        ["render", "format"] => {
            config.render.format = match OutputFormat::from_name(value) {
                Some(format) => format,
                None => bail!("Unknown output format: {}", value),
            }
        }
        ["render", "page_title"] => config.render.page_title = value.to_string(),
        ["log", "level"] => {
            config.log.level = value.parse::<LogLevel>().map_err(anyhow::Error::msg)?;
        }
        ["log", "format"] => {
            config.log.format = value.parse::<LogFormat>().map_err(anyhow::Error::msg)?;
        }
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &Path) -> Result<String> {
    for name in &CONFIG_FILE_NAMES {
        let path = cwd.join(name);
        if path.exists() {
            return Ok(path.to_string_lossy().to_string());
        }
    }
    bail!("No config file found. Run `shoecard config init` to create one.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_values() {
        let mut config = CliConfig::default();

        set_config_value(&mut config, "catalog.currency", "gbp").unwrap();
        set_config_value(&mut config, "catalog.recency_days", "14").unwrap();
        set_config_value(&mut config, "render.format", "page").unwrap();
        set_config_value(&mut config, "log.level", "debug").unwrap();
        set_config_value(&mut config, "log.format", "json").unwrap();

        assert_eq!(get_config_value(&config, "catalog.currency").unwrap(), "GBP");
        assert_eq!(get_config_value(&config, "catalog.recency_days").unwrap(), "14");
        assert_eq!(get_config_value(&config, "render.format").unwrap(), "page");
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(get_config_value(&config, "log.format").unwrap(), "json");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = CliConfig::default();
        assert!(set_config_value(&mut config, "catalog.currency", "XXX").is_err());
        assert!(set_config_value(&mut config, "catalog.recency_days", "-1").is_err());
        assert!(set_config_value(&mut config, "render.format", "pdf").is_err());
        assert!(set_config_value(&mut config, "log.level", "loud").is_err());
        assert!(get_config_value(&config, "nope").is_err());
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_validation_findings() {
        let (errors, warnings) = validation_findings(&CliConfig::default());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        let mut config = CliConfig::default();
        config.catalog.currency = "XXX".to_string();
        config.catalog.recency_days = 0;
        config.render.link_base = "shoe/".to_string();
        let (errors, warnings) = validation_findings(&config);
        assert_eq!(errors.len(), 2);
        assert_eq!(warnings.len(), 1);
    }
}
