//! Wall-clock sources for the session.
//!
//! The session never calls `Local::now()` directly; it asks its [`Clock`].
//! Production code uses [`SystemClock`], tests drive a [`ManualClock`].

use chrono::{DateTime, Duration, Local, Timelike};
use std::sync::{Arc, Mutex};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The local system clock, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        let now = Local::now();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the session.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }

    pub fn advance_secs(&self, seconds: i64) {
        self.advance(Duration::seconds(seconds));
    }

    pub fn set(&self, to: DateTime<Local>) {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
