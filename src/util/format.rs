//! Display formatting for server timestamps.
//!
//! Output is fixed to the `fr-FR` long form (`5 janvier 2024 à 09:05`)
//! regardless of the browser locale. Timestamps are shown as wall-clock time
//! in the offset they carry; naive ISO timestamps (what the server emits)
//! are shown as-is.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive);
    }
    raw.parse::<NaiveDate>().ok().and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn format_datetime(value: &NaiveDateTime) -> String {
    let month = MONTHS_FR[value.month0() as usize];
    format!("{} {month} {} à {:02}:{:02}", value.day(), value.year(), value.hour(), value.minute())
}

/// Human-readable date for an ISO-8601 timestamp. Unparseable input is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |value| format_datetime(&value))
}

/// `format_date` for optional fields; absent timestamps render empty.
pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date).unwrap_or_default()
}

/// File size with a binary unit, e.g. `1,5 Ko`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["o", "Ko", "Mo", "Go"];
    #[allow(clippy::cast_precision_loss)]
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{size:.1} {}", UNITS[unit]).replace('.', ",")
    }
}
