//! Report pricing problems in a listings file.

use anyhow::{bail, Result};
use serde::Serialize;
use shoe_catalog::listing::{ListingRecord, ShoeListing};
use shoe_catalog::money::Currency;

use super::CheckArgs;
use crate::context::Context;
use crate::listings::read_records;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    pub checked: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Run the check command.
pub async fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.listings);
    let currency = ctx.config.currency()?;
    let records = read_records(&path).await?;

    ctx.output.header(&format!("Checking {}", path.display()));

    let report = build_report(records, currency);

    for warning in &report.warnings {
        ctx.logger
            .warn_builder("listing issue")
            .field("issue", warning.as_str())
            .emit();
    }

    if ctx.output.is_json() {
        ctx.output.json(&report)?;
    } else {
        for error in &report.errors {
            ctx.output.error(&format!("Error: {}", error));
        }
        for warning in &report.warnings {
            ctx.output.warn(&format!("Warning: {}", warning));
        }
    }

    if !report.errors.is_empty() {
        bail!("{} listing(s) could not be read", report.errors.len());
    }

    if report.warnings.is_empty() {
        ctx.output
            .success(&format!("{} listing(s) look good", report.checked));
    } else {
        ctx.output.success(&format!(
            "{} listing(s) readable ({} warning(s))",
            report.checked,
            report.warnings.len()
        ));
    }

    Ok(())
}

/// Sort each record into errors (unreadable) or warnings (pricing issues).
fn build_report(records: Vec<ListingRecord>, currency: Currency) -> CheckReport {
    let mut report = CheckReport {
        checked: records.len(),
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    for (i, record) in records.into_iter().enumerate() {
        let label = format!("#{} ({})", i + 1, record.slug);
        match ShoeListing::from_record(record, currency) {
            Ok(listing) => report.warnings.extend(
                listing
                    .issues()
                    .into_iter()
                    .map(|issue| format!("{}: {}", label, issue)),
            ),
            Err(e) => report.errors.push(format!("{}: {}", label, e)),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        slug: &str,
        price: i64,
        sale_price: Option<i64>,
        release_date: &str,
    ) -> ListingRecord {
        ListingRecord {
            slug: slug.to_string(),
            name: slug.to_string(),
            image_src: format!("/assets/{}.jpg", slug),
            price,
            sale_price,
            release_date: release_date.to_string(),
            num_of_colors: 1,
        }
    }

    #[test]
    fn test_report_sorts_errors_and_warnings() {
        let report = build_report(
            vec![
                record("good", 10000, Some(8000), "2024-01-01"),
                record("bad-date", 10000, None, "someday"),
                record("not-discounted", 10000, Some(12000), "2024-01-01"),
            ],
            Currency::USD,
        );

        assert_eq!(report.checked, 3);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("#2 (bad-date)"));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("#3 (not-discounted)"));
    }

    #[test]
    fn test_clean_listings_report_nothing() {
        let report = build_report(
            vec![
                record("plain", 9000, None, "2024-01-01"),
                record("free", 9000, Some(0), "2024-01-01"),
            ],
            Currency::USD,
        );

        assert_eq!(report.checked, 2);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_negative_price_is_an_error() {
        let report = build_report(vec![record("neg", -1, None, "2024-01-01")], Currency::USD);
        assert_eq!(report.errors.len(), 1);
        assert!(report.warnings.is_empty());
    }
}
