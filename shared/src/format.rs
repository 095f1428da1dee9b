use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses the timestamp shapes the API is known to send: RFC 3339
/// (`2024-03-01T08:00:00.000Z`), a bare date (`2024-03-01`), or a naive
/// date-time without offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Utc).naive_utc());
    }
    if let Ok(value) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(value);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Short display date such as `Mar 1, 2024`. Unparseable input is returned
/// unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(value) => value.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// `YYYY-MM-DD` for a date input, empty when unparseable.
pub fn date_input_value(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|value| value.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_api_timestamps() {
        assert_eq!(format_date("2024-03-01T08:00:00.000Z"), "Mar 1, 2024");
        assert_eq!(format_date("2023-12-25"), "Dec 25, 2023");
        assert_eq!(format_date("2024-07-04T10:30:00"), "Jul 4, 2024");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("next sunday"), "next sunday");
        assert_eq!(format_date(""), "");
        assert_eq!(date_input_value("garbage"), "");
    }

    #[test]
    fn date_input_normalizes_timestamps() {
        assert_eq!(date_input_value("2024-03-01T23:30:00.000Z"), "2024-03-01");
    }
}
