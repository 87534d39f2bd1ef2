//! Small text formatting helpers shared by the HTML template.

use chrono::NaiveDate;

/// Escape text for use in HTML element content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Distance in miles, always with a fractional part (`0.5`, `1.0`).
pub fn fmt_miles(miles: f64) -> String {
    if miles.is_finite() && miles.fract() == 0.0 {
        format!("{miles:.1}")
    } else {
        format!("{miles}")
    }
}

/// Human-readable report date, e.g. `October 16, 2026`.
pub fn fmt_report_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}
