//! shoecard - Command line tool for shoe listing cards.
//!
//! Commands:
//! - `shoecard render` - Render a listings file to HTML or JSON cards
//! - `shoecard variant` - Resolve the card variant for ad-hoc inputs
//! - `shoecard check` - Report pricing problems in a listings file
//! - `shoecard config` - Manage configuration

mod commands;
mod config;
mod context;
mod listings;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CheckArgs, ConfigArgs, RenderArgs, VariantArgs};

/// shoecard - Render and check shoe listing cards
#[derive(Parser)]
#[command(name = "shoecard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render listings to cards
    Render(RenderArgs),

    /// Resolve the variant for a sale price and release date
    Variant(VariantArgs),

    /// Check a listings file for pricing problems
    Check(CheckArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Render(_) => "render",
            Commands::Variant(_) => "variant",
            Commands::Check(_) => "check",
            Commands::Config(_) => "config",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let command = cli.command.name();
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone(), command) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    ctx.logger.debug("starting");

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Variant(args) => commands::variant::run(args, &ctx).await,
        Commands::Check(args) => commands::check::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.logger.error(&format!("{:#}", e));
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "shoecard", "render", "shoes.json", "--format", "json", "--now", "2024-06-15",
        ]);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.listings, "shoes.json");
                assert_eq!(args.format, Some(config::OutputFormat::Json));
                assert_eq!(args.now.as_deref(), Some("2024-06-15"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_variant_zero_sale_price() {
        let cli = Cli::parse_from([
            "shoecard", "--json", "variant", "--sale-price", "0", "--release-date", "2019-01-01",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Variant(args) => assert_eq!(args.sale_price, Some(0)),
            _ => panic!("expected variant"),
        }
    }
}
