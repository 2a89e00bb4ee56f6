//! Timestamp parsing and display.
//!
//! The backend sends ISO 8601, with or without an offset. Offsets are kept as
//! wall-clock time in that offset.

use chrono::{DateTime, NaiveDateTime, Timelike};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// `YYYY-MM-DD HH:MM`, or the input unchanged when it cannot be parsed
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Date portion of an ISO timestamp
pub fn date_part(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

/// `MM/DD/YY h:MM AM`
pub fn format_short(ts: &NaiveDateTime) -> String {
    let (is_pm, hour) = ts.hour12();
    format!(
        "{} {}:{:02} {}",
        ts.format("%m/%d/%y"),
        hour,
        ts.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2024-03-05T14:07:00+00:00").is_some());
        assert!(parse_timestamp("2024-03-05T14:07:00.123456").is_some());
        assert!(parse_timestamp("2024-03-05 14:07:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_format_timestamp_keeps_offset_wall_clock() {
        assert_eq!(format_timestamp("2024-03-05T14:07:00-05:00"), "2024-03-05 14:07");
        assert_eq!(format_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_format_short() {
        let ts = parse_timestamp("2024-03-05T00:09:00").unwrap();
        assert_eq!(format_short(&ts), "03/05/24 12:09 AM");
        let ts = parse_timestamp("2024-12-31T13:30:00").unwrap();
        assert_eq!(format_short(&ts), "12/31/24 1:30 PM");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-03-05T14:07:00"), "2024-03-05");
        assert_eq!(date_part("short"), "short");
    }
}
