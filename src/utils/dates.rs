use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Shown when the backend sends a timestamp we cannot read.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats a backend timestamp as a short date in the viewer's time zone.
pub fn display_date(raw: &str) -> String {
    display_date_in(raw, &Local)
}

/// Formats `raw` as `M/D/YYYY` in the given time zone.
///
/// Accepts RFC 3339 timestamps (what the API sends), offset-less timestamps (read as
/// UTC) and bare dates.
pub fn display_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(tz).date_naive().format("%-m/%-d/%Y").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc().with_timezone(tz).date_naive().format("%-m/%-d/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }

    INVALID_DATE.to_string()
}
