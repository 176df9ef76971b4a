//! Render listings to cards.

use anyhow::{Context as _, Result};
use shoe_catalog::card::{CardRenderer, CardView};
use shoe_markup::{render_card_grid, render_document};

use super::{recency_for, RenderArgs};
use crate::config::OutputFormat;
use crate::context::Context;
use crate::listings::load_listings;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.listings);
    let currency = ctx.config.currency()?;
    let listings = load_listings(&path, currency).await?;

    let recency = recency_for(args.now.as_deref(), ctx.config.recency_window())?;
    let renderer = CardRenderer::new(recency)
        .with_link_base(ctx.config.render.link_base.clone());
    let cards = renderer.render_all(&listings);

    let format = args.format.unwrap_or(ctx.config.render.format);
    let body = paint(&cards, format, &ctx.config.render.page_title)?;

    ctx.logger
        .info_builder("rendered cards")
        .field("listings", path.display().to_string())
        .field("format", format.as_str())
        .field_i64("count", cards.len() as i64)
        .field("now", renderer.recency().now().to_rfc3339())
        .emit();

    match args.output {
        Some(ref output) => {
            let out_path = ctx.resolve_path(output);
            tokio::fs::write(&out_path, body)
                .await
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
            ctx.output
                .success(&format!("Wrote {} card(s) to {}", cards.len(), out_path.display()));
        }
        None => println!("{}", body),
    }

    Ok(())
}

/// Paint cards in the requested format.
pub fn paint(cards: &[CardView], format: OutputFormat, page_title: &str) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => render_card_grid(cards),
        OutputFormat::Page => render_document(page_title, cards),
        OutputFormat::Json => serde_json::to_string_pretty(cards)?,
    })
}
