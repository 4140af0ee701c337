//! Display helpers shared by the reports.

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder for values the producer did not record.
pub const NOT_AVAILABLE: &str = "N/A";

/// Renders an optional timestamp.
///
/// RFC 3339 and naive ISO-8601 datetimes (with or without fractional
/// seconds) are shortened to `YYYY-MM-DD HH:MM:SS`; anything else is shown
/// verbatim.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return NOT_AVAILABLE.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return dt.format(DISPLAY_FORMAT).to_string();
    }

    raw.to_string()
}

/// Renders a free-form JSON value: strings without quotes, everything else
/// as compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "none".to_string(),
        other => other.to_string(),
    }
}

/// Renders a decimal with exactly `dp` places, rounding half away from zero.
///
/// `Decimal`'s own precision formatting truncates, so the value is rounded
/// first and the precision only pads.
pub fn format_decimal(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}
