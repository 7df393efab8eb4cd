//! Time duration formatting utilities for user-friendly display.
//!
//! Every duration shown by timekeeper passes through this module, whether it
//! ends up on the live status line, in the incremental daily log or in the
//! final breakdown report.
//!
//! ## Format Specifications
//!
//! - [`format_duration`] takes whole minutes and renders `H:MM h`
//! - [`format_duration_with_seconds`] takes seconds and renders `H:MM:SS h`
//!   when at least one hour has elapsed, `MM:SS min` otherwise
//! - [`format_clock`] renders a local instant as `HH:MM`
//!
//! Hours are never padded; minutes and seconds are always two digits.
//!
//! ### Examples
//! - 12 minutes → "0:12 h"
//! - 62 minutes → "1:02 h"
//! - 728 seconds → "12:08 min"
//! - 3758 seconds → "1:02:38 h"

use chrono::{DateTime, Local};

/// Splits a number of seconds into `(hours, minutes, seconds)`.
///
/// Hours are not wrapped, so a duration of several days yields an hour
/// component above 24.
///
/// # Examples
///
/// ```rust
/// use timekeeper::libs::formatter::hms;
///
/// assert_eq!(hms(0), (0, 0, 0));
/// assert_eq!(hms(3599), (0, 59, 59));
/// assert_eq!(hms(12 * 3600 + 45 * 60 + 38), (12, 45, 38));
/// ```
pub fn hms(total_seconds: u64) -> (u64, u64, u64) {
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    (hours, minutes, seconds)
}

/// Same as [`hms`] for fractional input.
///
/// The fractional part is discarded rather than rounded, and negative values
/// are treated as zero.
pub fn hms_f64(total_seconds: f64) -> (u64, u64, u64) {
    hms(total_seconds.max(0.0).trunc() as u64)
}

/// Formats an elapsed number of seconds for the live status display.
///
/// ```rust
/// use timekeeper::libs::formatter::format_duration_with_seconds;
///
/// assert_eq!(format_duration_with_seconds(12 * 60 + 8), "12:08 min");
/// assert_eq!(format_duration_with_seconds(3600 + 2 * 60 + 38), "1:02:38 h");
/// ```
pub fn format_duration_with_seconds(total_seconds: u64) -> String {
    let (hours, minutes, seconds) = hms(total_seconds);
    if hours > 0 {
        format!("{}:{:02}:{:02} h", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02} min", minutes, seconds)
    }
}

/// Formats a number of whole minutes as `H:MM h`.
///
/// This is the format used for every duration written to the daily log and
/// the breakdown report.
///
/// ```rust
/// use timekeeper::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(12), "0:12 h");
/// assert_eq!(format_duration(62), "1:02 h");
/// ```
pub fn format_duration(total_minutes: u64) -> String {
    let (hours, minutes, _) = hms(total_minutes.saturating_mul(60));
    format!("{}:{:02} h", hours, minutes)
}

/// Formats the wall-clock time of an instant as `HH:MM`.
pub fn format_clock(instant: &DateTime<Local>) -> String {
    instant.format("%H:%M").to_string()
}
