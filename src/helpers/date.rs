//! Date helper functions

use crate::content::post::parse_date;

/// Format a front-matter date in long form (like "January 15, 2024")
///
/// Dates that cannot be parsed are shown as written.
///
/// # Examples
/// ```ignore
/// display_date("2024-01-15") // -> "January 15, 2024"
/// ```
pub fn display_date(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Format a front-matter date as ISO 8601 for `<time datetime>`
pub fn date_xml(date: &str) -> Option<String> {
    parse_date(date).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Generate a <time> HTML element
pub fn time_tag(date: &str) -> String {
    match date_xml(date) {
        Some(iso) => format!(r#"<time datetime="{}">{}</time>"#, iso, display_date(date)),
        None => format!("<time>{}</time>", display_date(date)),
    }
}
