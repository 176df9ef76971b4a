//! Label text helpers.

/// Prefix `noun` with `count`, pluralizing with a trailing `s` unless the count is one.
///
/// ```
/// use shoe_catalog::text::pluralize;
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 3), "3 Colors");
/// ```
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
