//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use lending_portal::models::parse_iso_date;

/// Descriptions longer than this are cut in the catalog table.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// `M/D/YYYY` for an ISO date or timestamp, `-` when absent. Unparseable
/// values are shown as received.
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return "-".to_owned();
    };
    match parse_iso_date(raw) {
        Some(date) => format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year()),
        None => raw.to_owned(),
    }
}

/// Cut `text` to `max` characters, appending `...` when anything was dropped.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

/// The value, or `-` when absent or blank.
pub fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("-").to_owned()
}
