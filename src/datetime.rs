// File: ./src/datetime.rs
// Tolerant parsing for the loosely-formatted timestamps the API emits
use crate::errors::DateTimeParseError;
use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};

/// One candidate encoding. Candidates are tried in declaration order and
/// the first full match wins.
enum Pattern {
    /// RFC 3339 / ISO-8601 with an explicit offset or trailing `Z`.
    Rfc3339,
    /// Format string carrying its own UTC offset.
    Offset(&'static str),
    /// Format string with no offset; the result is taken as UTC.
    Naive(&'static str),
}

// The service does not pin a single timestamp encoding; responses have been
// seen with and without fractional seconds, with and without an explicit
// offset, and with a space instead of the `T` separator. `%.f` matches an
// optional fraction, so each format line covers both variants.
const DATE_TIME_PATTERNS: &[Pattern] = &[
    Pattern::Rfc3339,
    Pattern::Offset("%Y-%m-%dT%H:%M:%S%.f%:z"),
    Pattern::Naive("%Y-%m-%dT%H:%M:%S%.f"),
    Pattern::Offset("%Y-%m-%d %H:%M:%S%.f%:z"),
    Pattern::Naive("%Y-%m-%d %H:%M:%S%.f"),
];

/// Date attached to bare time-of-day values; only the time and offset
/// components are meaningful to callers.
const SENTINEL_YMD: (i32, u32, u32) = (2020, 1, 1);

/// Parse a date/time string in any of the recognized encodings.
///
/// A string with no offset is interpreted as UTC. Returns an error when no
/// candidate pattern matches the whole input.
pub fn parse_date_time(text: &str) -> Result<DateTime<FixedOffset>, DateTimeParseError> {
    for pattern in DATE_TIME_PATTERNS {
        let parsed = match pattern {
            Pattern::Rfc3339 => DateTime::parse_from_rfc3339(text).ok(),
            Pattern::Offset(format) => DateTime::parse_from_str(text, format).ok(),
            Pattern::Naive(format) => NaiveDateTime::parse_from_str(text, format)
                .ok()
                .map(|naive| naive.and_utc().fixed_offset()),
        };
        if let Some(value) = parsed {
            return Ok(value);
        }
    }
    Err(DateTimeParseError::new(text))
}

/// Parse a bare time-of-day string, with or without an explicit offset.
///
/// The date portion is pinned to the 2020-01-01 sentinel since only the
/// time of day carries meaning for these values.
pub fn parse_time(text: &str) -> Result<DateTime<FixedOffset>, DateTimeParseError> {
    if let Some(value) = parse_offset_time(text, "%H:%M:%S%.f%:z") {
        return Ok(value);
    }
    let (year, month, day) = SENTINEL_YMD;
    if let Ok(time) = NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
        && let Some(date) = NaiveDate::from_ymd_opt(year, month, day)
    {
        return Ok(date.and_time(time).and_utc().fixed_offset());
    }
    Err(DateTimeParseError::new(text))
}

/// Canonical output encoding: RFC 3339 with an explicit offset, fractional
/// seconds emitted only when non-zero.
pub fn format_date_time(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

fn parse_offset_time(text: &str, format: &str) -> Option<DateTime<FixedOffset>> {
    let (year, month, day) = SENTINEL_YMD;
    let mut parsed = Parsed::new();
    parse(&mut parsed, text, StrftimeItems::new(format)).ok()?;
    parsed.set_year(i64::from(year)).ok()?;
    parsed.set_month(i64::from(month)).ok()?;
    parsed.set_day(i64::from(day)).ok()?;
    parsed.to_datetime().ok()
}

/// Serde bridge routing timestamp-typed fields through the tolerant
/// parser, for use with `#[serde(with = "crossword_api_data::datetime::flexible")]`.
pub mod flexible {
    use super::{format_date_time, parse_date_time};
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date_time(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_date_time(&text).map_err(serde::de::Error::custom)
    }
}
