//! Resolve the variant for ad-hoc inputs.

use anyhow::{Context as _, Result};
use serde::Serialize;
use shoe_catalog::money::Money;
use shoe_catalog::recency::parse_release_date;
use shoe_catalog::variant::{resolve_variant, Variant};

use super::{recency_for, VariantArgs};
use crate::context::Context;
use crate::output::variant_badge;

#[derive(Serialize)]
struct VariantReport {
    variant: Variant,
    badge: Option<&'static str>,
    is_new: bool,
    now: String,
}

/// Run the variant command.
pub async fn run(args: VariantArgs, ctx: &Context) -> Result<()> {
    let currency = ctx.config.currency()?;
    let release_date = parse_release_date(&args.release_date)
        .with_context(|| format!("Invalid --release-date: {}", args.release_date))?;
    let recency = recency_for(args.now.as_deref(), ctx.config.recency_window())?;
    let sale_price = args.sale_price.map(|amount| Money::new(amount, currency));

    let variant = resolve_variant(sale_price, release_date, &recency);
    let report = VariantReport {
        variant,
        badge: variant.badge().map(|b| b.label),
        is_new: recency.is_new(release_date),
        now: recency.now().to_rfc3339(),
    };

    ctx.logger
        .debug_builder("resolved variant")
        .field("variant", variant.as_str())
        .field_bool("has_sale_price", sale_price.is_some())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&report)?;
        return Ok(());
    }

    ctx.output.kv("variant", &variant_badge(variant));
    ctx.output.kv("badge", report.badge.unwrap_or("none"));
    ctx.output.kv("released recently", &report.is_new.to_string());
    if let Some(price) = sale_price {
        ctx.output.kv("sale price", &price.display());
    }

    Ok(())
}
