//! The activity session state machine.
//!
//! A [`Session`] is either idle or running one activity since some start
//! instant. It changes state only through [`Session::set_activity`]:
//!
//! ```text
//!                 set_activity(A)
//!        ┌──────┐ ───────────────▶ ┌──────────────┐  set_activity(A): start -= 60s
//!        │ Idle │                  │ Active(A, t) │ ◀───────────────┐
//!        └──────┘ ◀─────────────── └──────────────┘ ─────────────────┘
//!                 set_activity(None)       │
//!                                          │ set_activity(B)
//!                                          ▼
//!                          elapsed < 10s: Active(B, t), nothing recorded
//!                          elapsed ≥ 10s: commit A, Active(B, now)
//! ```
//!
//! A commit appends the interval to the history, credits its minutes to the
//! activity total and writes it to the day's files before `set_activity`
//! returns.
//!
//! The history and totals of earlier runs on the same day are rebuilt from
//! the raw file when the session is opened. An activity that was running when
//! a previous run died is not resumed.

use crate::libs::activity::{validate_name, ActivityList};
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::SessionConfig;
use crate::libs::interval::{whole_seconds, Interval};
use crate::libs::report::Report;
use crate::libs::storage::{daily_file_key, DailyLog};
use anyhow::Result;
use chrono::{DateTime, Duration, Local};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// The activity currently being timed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Running {
    activity: String,
    start: DateTime<Local>,
}

/// What a call to [`Session::set_activity`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Idle and asked to stay idle.
    Ignored,
    /// Idle, now running `activity`.
    Started { activity: String },
    /// The running activity was selected again; its start moved back.
    Extended { activity: String, start: DateTime<Local> },
    /// Switched before the commit threshold. The time spent on `discarded`
    /// now counts towards `activity`.
    Replaced { discarded: String, activity: String },
    /// The running activity was recorded. `next` is what runs now, if anything.
    Committed { interval: Interval, next: Option<String> },
    /// Stopped before the commit threshold; nothing was recorded.
    Stopped { discarded: String },
}

pub struct Session<C: Clock = SystemClock> {
    clock: C,
    config: SessionConfig,
    activities: ActivityList,
    log: DailyLog,
    running: Option<Running>,
    history: Vec<Interval>,
    totals: HashMap<String, u64>,
}

impl<C: Clock> Session<C> {
    /// Opens today's session, replaying whatever earlier runs recorded in
    /// `data_dir`.
    pub fn open(clock: C, activities: ActivityList, data_dir: impl Into<PathBuf>, config: SessionConfig) -> Result<Self> {
        let day = daily_file_key(&clock.now());
        let log = DailyLog::new(data_dir, day);
        let replayed = log.replay(config.replay_policy)?;

        let mut session = Self {
            clock,
            config,
            activities,
            log,
            running: None,
            history: Vec::with_capacity(replayed.len()),
            totals: HashMap::new(),
        };
        for interval in replayed {
            session.credit(interval);
        }

        info!(
            day = %session.log.day(),
            intervals = session.history.len(),
            total_minutes = session.total_minutes(),
            "session opened"
        );
        Ok(session)
    }

    /// Switches to `activity`, or stops timing when it is `None`.
    ///
    /// The name is trimmed; one that is blank or contains a comma or a line
    /// break is rejected. Other errors come from writing a committed interval
    /// to disk. In both cases the session is left as it was before the call
    /// and nothing reached the raw file.
    pub fn set_activity(&mut self, activity: Option<&str>) -> Result<Transition> {
        let activity = activity.map(validate_name).transpose()?;

        let now = self.clock.now();
        let Some(running) = self.running.as_mut() else {
            return Ok(match activity {
                None => Transition::Ignored,
                Some(name) => {
                    debug!(activity = name, "activity started");
                    self.running = Some(Running {
                        activity: name.to_string(),
                        start: now,
                    });
                    Transition::Started {
                        activity: name.to_string(),
                    }
                }
            });
        };

        if activity == Some(running.activity.as_str()) {
            running.start -= Duration::seconds(self.config.reclick_extension_seconds as i64);
            debug!(activity = %running.activity, start = %running.start, "start extended");
            return Ok(Transition::Extended {
                activity: running.activity.clone(),
                start: running.start,
            });
        }

        let elapsed = whole_seconds(&running.start, &now);
        if elapsed < self.config.min_commit_seconds {
            let discarded = running.activity.clone();
            debug!(activity = %discarded, elapsed, "switch below commit threshold, slice discarded");
            return Ok(match activity {
                Some(name) => {
                    running.activity = name.to_string();
                    Transition::Replaced {
                        discarded,
                        activity: name.to_string(),
                    }
                }
                None => {
                    self.running = None;
                    Transition::Stopped { discarded }
                }
            });
        }

        let interval = Interval::new(running.activity.clone(), running.start, now);
        self.commit(&interval)?;

        self.running = activity.map(|name| Running {
            activity: name.to_string(),
            start: now,
        });
        Ok(Transition::Committed {
            interval,
            next: activity.map(str::to_string),
        })
    }

    /// Stops timing, committing the running activity if it passed the
    /// threshold.
    pub fn stop(&mut self) -> Result<Transition> {
        self.set_activity(None)
    }

    /// Ends the session: commits the running activity, then overwrites the
    /// day's readable log with the breakdown report.
    ///
    /// Consumes the session, so the sequence cannot run twice. Returns the
    /// report, or `None` when the day has no intervals and nothing was
    /// written.
    pub fn finish(mut self) -> Result<Option<Report>> {
        self.stop()?;

        let Some(report) = Report::build(&self.history, &self.totals, &self.activities) else {
            debug!("empty history, no report written");
            return Ok(None);
        };
        self.log.write_log(&report.render())?;
        info!(path = %self.log.log_path().display(), intervals = self.history.len(), "report written");
        Ok(Some(report))
    }

    fn commit(&mut self, interval: &Interval) -> Result<()> {
        if daily_file_key(&interval.end) != self.log.day() {
            warn!(
                day = %self.log.day(),
                end = %interval.end,
                "interval ends after the session day, recording it under the session day"
            );
        }
        self.log.append(interval)?;
        info!(activity = %interval.activity, minutes = interval.minutes, "interval committed");
        self.credit(interval.clone());
        Ok(())
    }

    fn credit(&mut self, interval: Interval) {
        *self.totals.entry(interval.activity.clone()).or_insert(0) += interval.minutes;
        self.history.push(interval);
    }

    pub fn current_activity(&self) -> Option<&str> {
        self.running.as_ref().map(|running| running.activity.as_str())
    }

    pub fn current_start(&self) -> Option<DateTime<Local>> {
        self.running.as_ref().map(|running| running.start)
    }

    /// Seconds since the running activity started, `None` when idle.
    pub fn elapsed_seconds(&self) -> Option<u64> {
        let now = self.clock.now();
        self.running.as_ref().map(|running| whole_seconds(&running.start, &now))
    }

    pub fn elapsed_minutes(&self) -> Option<u64> {
        self.elapsed_seconds().map(|seconds| seconds / 60)
    }

    /// Committed minutes per activity.
    pub fn totals(&self) -> &HashMap<String, u64> {
        &self.totals
    }

    pub fn total_for(&self, activity: &str) -> u64 {
        self.totals.get(activity).copied().unwrap_or(0)
    }

    /// Committed minutes across all activities.
    pub fn total_minutes(&self) -> u64 {
        self.totals.values().sum()
    }

    /// Committed minutes plus the whole minutes of the running activity.
    pub fn running_total_minutes(&self) -> u64 {
        self.total_minutes() + self.elapsed_minutes().unwrap_or(0)
    }

    pub fn history(&self) -> &[Interval] {
        &self.history
    }

    pub fn activities(&self) -> &ActivityList {
        &self.activities
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn daily_log(&self) -> &DailyLog {
        &self.log
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }
}
