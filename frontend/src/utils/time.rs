use chrono::{NaiveDate, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// `YYYY-MM-DD` as `MM/DD/YYYY`; anything unparseable is shown as-is and a
/// missing value as `N/A`.
pub fn format_display_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => parse_date(raw)
            .map(|date| date.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => "N/A".to_string(),
    }
}

pub fn now_unix_seconds() -> i64 {
    Utc::now().timestamp()
}
