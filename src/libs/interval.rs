//! Committed activity intervals.

use crate::libs::formatter::{format_clock, format_duration};
use chrono::{DateTime, Local};
use std::collections::HashMap;

/// A finished stretch of time spent on one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// The activity the time is credited to.
    pub activity: String,
    /// Whole minutes between `start` and `end`, truncated.
    pub minutes: u64,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl Interval {
    /// Creates an interval, deriving the minute count from its bounds.
    ///
    /// A span that runs backwards (the wall clock was set back) counts as
    /// zero minutes.
    pub fn new(activity: impl Into<String>, start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            activity: activity.into(),
            minutes: whole_minutes(&start, &end),
            start,
            end,
        }
    }

    /// The line appended to the daily log while the session is running.
    pub fn log_line(&self) -> String {
        format!(
            "{} - {} {:<25} {}",
            format_clock(&self.start),
            format_clock(&self.end),
            self.activity,
            format_duration(self.minutes)
        )
    }

    /// The line written for this interval in the final report.
    pub fn report_line(&self) -> String {
        format!(
            "{} - {} {:<25} {:>7}",
            format_clock(&self.start),
            format_clock(&self.end),
            self.activity,
            format_duration(self.minutes)
        )
    }
}

/// Whole seconds from `start` to `end`, or zero when `end` is earlier.
pub fn whole_seconds(start: &DateTime<Local>, end: &DateTime<Local>) -> u64 {
    end.signed_duration_since(*start).num_seconds().max(0) as u64
}

/// Whole minutes from `start` to `end`, truncated.
pub fn whole_minutes(start: &DateTime<Local>, end: &DateTime<Local>) -> u64 {
    whole_seconds(start, end) / 60
}

/// Sums the minutes of `intervals` per activity.
pub fn totals(intervals: &[Interval]) -> HashMap<String, u64> {
    let mut totals = HashMap::new();
    for interval in intervals {
        *totals.entry(interval.activity.clone()).or_insert(0) += interval.minutes;
    }
    totals
}
