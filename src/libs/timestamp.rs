//! Encoding and decoding of the timestamps stored in the raw daily file.
//!
//! Timestamps are written as local wall-clock time in the fixed-width
//! `YYYYMMDD-HHMMSS` form. Older raw files stored bare epoch seconds instead;
//! those are still accepted when reading.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone};
use thiserror::Error;

/// The fixed-width layout used by [`encode`].
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Reasons a stored timestamp cannot be turned back into an instant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("invalid timestamp '{value}': expected YYYYMMDD-HHMMSS")]
    InvalidFormat { value: String },
    #[error("invalid timestamp '{value}': not an epoch second count")]
    InvalidEpoch { value: String },
    #[error("timestamp '{value}' does not exist in the local time zone")]
    NonexistentLocalTime { value: String },
}

/// Encodes an instant as local `YYYYMMDD-HHMMSS`.
///
/// Sub-second precision is dropped.
pub fn encode(instant: &DateTime<Local>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Encodes the current time.
pub fn encode_now() -> String {
    encode(&Local::now())
}

/// Decodes a stored timestamp.
///
/// A value containing `-` is parsed as the fixed-width local format; anything
/// else is read as legacy epoch seconds. When a local time is ambiguous (the
/// repeated hour at the end of daylight saving time) the earlier instant wins.
///
/// # Examples
///
/// ```rust
/// use timekeeper::libs::timestamp::decode;
///
/// assert_eq!(decode("1").unwrap().timestamp(), 1);
/// assert!(decode("yesterday").is_err());
/// ```
pub fn decode(value: &str) -> Result<DateTime<Local>, TimestampError> {
    let value = value.trim();

    if value.contains('-') {
        let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| TimestampError::InvalidFormat {
            value: value.to_string(),
        })?;
        return match Local.from_local_datetime(&naive) {
            LocalResult::Single(instant) => Ok(instant),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => Err(TimestampError::NonexistentLocalTime {
                value: value.to_string(),
            }),
        };
    }

    let seconds: i64 = value.parse().map_err(|_| TimestampError::InvalidEpoch {
        value: value.to_string(),
    })?;
    Local.timestamp_opt(seconds, 0).single().ok_or_else(|| TimestampError::InvalidEpoch {
        value: value.to_string(),
    })
}
