//! Daily interval files.
//!
//! Every session day owns two files under the data directory:
//!
//! ```text
//! data/
//! ├── 2024-05-14.txt        human-readable log, rewritten by the final report
//! └── raw/
//!     └── 2024-05-14.txt    start,end,activity per committed interval
//! ```
//!
//! The raw file is the source of truth. It is only ever appended to, and it is
//! replayed at startup to rebuild the day's history. The human-readable log is
//! appended to as intervals are committed and then replaced wholesale by the
//! breakdown report when the session ends.
//!
//! Both files are selected by the same [`daily_file_key`] of the session day,
//! so an interval committed after midnight still lands next to the rest of the
//! session it belongs to.

use crate::libs::interval::Interval;
use crate::libs::timestamp::{self, TimestampError};
use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";
const RAW_DIR: &str = "raw";

/// What to do with a raw line that cannot be read back.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplayPolicy {
    /// Abort the replay with a [`ReplayError`].
    #[default]
    Strict,
    /// Log a warning and continue with the next line.
    Skip,
}

/// A raw line that could not be turned back into an interval.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("{path}:{line}: expected 3 comma-separated fields, found {found}")]
    FieldCount { path: String, line: usize, found: usize },
    #[error("{path}:{line}: empty activity name")]
    EmptyActivity { path: String, line: usize },
    #[error("{path}:{line}: {source}")]
    Timestamp {
        path: String,
        line: usize,
        #[source]
        source: TimestampError,
    },
}

/// The calendar day an instant belongs to, used to name both daily files.
pub fn daily_file_key(instant: &DateTime<Local>) -> NaiveDate {
    instant.date_naive()
}

fn file_name(day: NaiveDate) -> String {
    format!("{}.txt", day.format("%Y-%m-%d"))
}

/// Formats one raw line (without the trailing newline).
pub fn raw_line(interval: &Interval) -> String {
    format!(
        "{},{},{}",
        timestamp::encode(&interval.start),
        timestamp::encode(&interval.end),
        interval.activity
    )
}

/// Parses one raw line. `line_no` and `path` only feed the error message.
pub fn parse_raw_line(line: &str, path: &str, line_no: usize) -> Result<Interval, ReplayError> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() != 3 {
        return Err(ReplayError::FieldCount {
            path: path.to_string(),
            line: line_no,
            found: fields.len(),
        });
    }

    let decode = |value: &str| {
        timestamp::decode(value).map_err(|source| ReplayError::Timestamp {
            path: path.to_string(),
            line: line_no,
            source,
        })
    };
    let start = decode(fields[0])?;
    let end = decode(fields[1])?;

    let activity = fields[2].trim();
    if activity.is_empty() {
        return Err(ReplayError::EmptyActivity {
            path: path.to_string(),
            line: line_no,
        });
    }

    Ok(Interval::new(activity, start, end))
}

/// The pair of files for one session day.
#[derive(Debug, Clone)]
pub struct DailyLog {
    data_dir: PathBuf,
    day: NaiveDate,
}

impl DailyLog {
    pub fn new(data_dir: impl Into<PathBuf>, day: NaiveDate) -> Self {
        Self {
            data_dir: data_dir.into(),
            day,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn raw_path(&self) -> PathBuf {
        self.data_dir.join(RAW_DIR).join(file_name(self.day))
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(file_name(self.day))
    }

    /// Reads the day's raw file back into intervals, oldest first.
    ///
    /// A missing file is an empty day. Blank lines are ignored; other
    /// unreadable lines are handled according to `policy`.
    pub fn replay(&self, policy: ReplayPolicy) -> Result<Vec<Interval>> {
        let path = self.raw_path();
        if !path.exists() {
            debug!(path = %path.display(), "no raw file to replay");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
        let path_str = path.display().to_string();
        let mut intervals = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_raw_line(line, &path_str, index + 1) {
                Ok(interval) => intervals.push(interval),
                Err(error) => match policy {
                    ReplayPolicy::Strict => return Err(error.into()),
                    ReplayPolicy::Skip => warn!(%error, "skipping unreadable raw line"),
                },
            }
        }

        debug!(path = %path_str, count = intervals.len(), "replayed raw file");
        Ok(intervals)
    }

    /// Appends a committed interval to the readable log, then to the raw file.
    ///
    /// The raw line goes last: an interval is only replayed once both writes
    /// succeeded, so a failed append can be retried without counting it
    /// twice. Both files are synced before returning.
    pub fn append(&self, interval: &Interval) -> Result<()> {
        append_line(&self.log_path(), &interval.log_line())?;
        append_line(&self.raw_path(), &raw_line(interval))?;
        Ok(())
    }

    /// Replaces the readable log with `content`.
    pub fn write_log(&self, content: &str) -> Result<()> {
        let path = self.log_path();
        ensure_parent(&path)?;
        let mut file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    writeln!(file, "{}", line)?;
    file.sync_data()?;
    Ok(())
}
