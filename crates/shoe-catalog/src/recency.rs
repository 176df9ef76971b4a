//! Release recency: deciding whether a shoe counts as newly released.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Default recency window: one month.
pub const DEFAULT_RECENCY_DAYS: u32 = 30;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// How far back a release date may lie and still count as new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecencyWindow {
    pub days: u32,
}

impl RecencyWindow {
    pub fn days(days: u32) -> Self {
        Self { days }
    }

    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.days))
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::days(DEFAULT_RECENCY_DAYS)
    }
}

/// The recency predicate evaluated against a fixed "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyCheck {
    now: DateTime<Utc>,
    window: RecencyWindow,
}

impl RecencyCheck {
    pub fn new(now: DateTime<Utc>, window: RecencyWindow) -> Self {
        Self { now, window }
    }

    /// Capture "now" from a clock.
    pub fn from_clock(clock: &impl Clock, window: RecencyWindow) -> Self {
        Self::new(clock.now(), window)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// True when less than the window has elapsed since `release_date`.
    ///
    /// Release dates in the future have negative elapsed time and count as new.
    pub fn is_new(&self, release_date: DateTime<Utc>) -> bool {
        self.now.signed_duration_since(release_date) < self.window.duration()
    }
}

/// Recency check with the default one-month window.
pub fn is_new_shoe(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    RecencyCheck::new(now, RecencyWindow::default()).is_new(release_date)
}

/// Parse a release date given as `YYYY-MM-DD` (midnight UTC) or RFC 3339.
pub fn parse_release_date(input: &str) -> Result<DateTime<Utc>, CatalogError> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CatalogError::InvalidReleaseDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_recent_release_is_new() {
        assert!(is_new_shoe(now() - Duration::days(10), now()));
    }

    #[test]
    fn test_old_release_is_not_new() {
        assert!(!is_new_shoe(now() - Duration::days(365 * 2), now()));
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let check = RecencyCheck::new(now(), RecencyWindow::default());
        assert!(check.is_new(now() - Duration::days(30) + Duration::seconds(1)));
        assert!(!check.is_new(now() - Duration::days(30)));
    }

    #[test]
    fn test_future_release_is_new() {
        assert!(is_new_shoe(now() + Duration::days(3), now()));
    }

    #[test]
    fn test_custom_window() {
        let check = RecencyCheck::new(now(), RecencyWindow::days(7));
        assert!(!check.is_new(now() - Duration::days(10)));
        assert!(check.is_new(now() - Duration::days(6)));
    }

    #[test]
    fn test_fixed_clock() {
        let check = RecencyCheck::from_clock(&FixedClock(now()), RecencyWindow::default());
        assert_eq!(check.now(), now());
    }

    #[test]
    fn test_parse_plain_date() {
        let parsed = parse_release_date("2024-06-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_release_date("2024-06-01T10:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid_date() {
        assert_eq!(
            parse_release_date("last tuesday"),
            Err(CatalogError::InvalidReleaseDate("last tuesday".to_string()))
        );
    }
}
