//! The end-of-session breakdown report.
//!
//! The report replaces the day's readable log once the session ends. It is
//! derived from the session history rather than from the lines appended
//! during the day:
//!
//! ```text
//! 09:00 - 10:30 programming                1:30 h
//! 10:30 - 10:45 support                    0:15 h
//!
//! Task breakdown:
//! programming                 1:30 h   85%
//! support                     0:15 h   14%
//! total                       1:45 h  100%
//!
//! 1 activity switches (0.6/h)
//! min 15.0 min, max 90.0 min, avg 52.5 min, std 37.5 min
//! ```
//!
//! Percentages are truncated, so the activity lines may add up to less
//! than 100.

use crate::libs::activity::{has_prefix, prefixes, ActivityList};
use crate::libs::formatter::format_duration;
use crate::libs::interval::Interval;
use crate::libs::stats::{duration_stats, DurationStats};
use std::collections::HashMap;
use std::fmt;

/// One row of the task or prefix breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownLine {
    pub name: String,
    pub minutes: u64,
    /// `100 * minutes / total`, truncated.
    pub percent: u64,
}

impl BreakdownLine {
    fn new(name: impl Into<String>, minutes: u64, total: u64) -> Self {
        Self {
            name: name.into(),
            minutes,
            percent: 100 * minutes / total,
        }
    }
}

impl fmt::Display for BreakdownLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:<25} {:>7} {:>4}%", self.name, format_duration(self.minutes), self.percent)
    }
}

/// Totals and statistics, present when at least one minute was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_minutes: u64,
    /// Activities by descending minutes, ties by name.
    pub tasks: Vec<BreakdownLine>,
    /// Prefix groups in ascending order, groups without minutes left out.
    /// `None` when no known activity has a prefix.
    pub prefixes: Option<Vec<BreakdownLine>>,
    pub switches: usize,
    pub switches_per_hour: f64,
    pub stats: DurationStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub intervals: Vec<Interval>,
    pub summary: Option<Summary>,
}

impl Report {
    /// Builds the report for a day's history.
    ///
    /// `totals` must be the per-activity sums of `history`. Prefix groups are
    /// taken from both the configured `activities` and the activities that
    /// appear in `totals`. Returns `None` for an empty history.
    pub fn build(history: &[Interval], totals: &HashMap<String, u64>, activities: &ActivityList) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        Some(Self {
            intervals: history.to_vec(),
            summary: Self::summarize(history, totals, activities),
        })
    }

    fn summarize(history: &[Interval], totals: &HashMap<String, u64>, activities: &ActivityList) -> Option<Summary> {
        let total: u64 = totals.values().sum();
        if total == 0 {
            return None;
        }

        let mut ranked: Vec<(&String, &u64)> = totals.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        let tasks = ranked
            .into_iter()
            .map(|(name, minutes)| BreakdownLine::new(name.as_str(), *minutes, total))
            .collect();

        let known = prefixes(activities.iter().chain(totals.keys().map(String::as_str)));
        let prefix_lines = if known.is_empty() {
            None
        } else {
            Some(
                known
                    .into_iter()
                    .filter_map(|prefix| {
                        let minutes: u64 = totals
                            .iter()
                            .filter(|(name, _)| has_prefix(name, &prefix))
                            .map(|(_, minutes)| minutes)
                            .sum();
                        (minutes > 0).then(|| BreakdownLine::new(prefix, minutes, total))
                    })
                    .collect(),
            )
        };

        let switches = history.len() - 1;
        let stats = duration_stats(history.iter().map(|interval| interval.minutes as f64))?;

        Some(Summary {
            total_minutes: total,
            tasks,
            prefixes: prefix_lines,
            switches,
            switches_per_hour: switches as f64 / (total as f64 / 60.0),
            stats,
        })
    }

    /// Renders the report as written to the readable log.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for interval in &self.intervals {
            writeln!(f, "{}", interval.report_line())?;
        }
        writeln!(f)?;

        let Some(summary) = &self.summary else {
            return Ok(());
        };

        writeln!(f, "Task breakdown:")?;
        for line in &summary.tasks {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", BreakdownLine::new("total", summary.total_minutes, summary.total_minutes))?;
        writeln!(f)?;

        if let Some(prefix_lines) = &summary.prefixes {
            writeln!(f, "Prefix breakdown:")?;
            for line in prefix_lines {
                writeln!(f, "{}", line)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{} activity switches ({:.1}/h)", summary.switches, summary.switches_per_hour)?;
        writeln!(
            f,
            "min {:.1} min, max {:.1} min, avg {:.1} min, std {:.1} min",
            summary.stats.min, summary.stats.max, summary.stats.mean, summary.stats.stddev
        )?;
        writeln!(f)
    }
}
