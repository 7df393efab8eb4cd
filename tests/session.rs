#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timekeeper::libs::activity::ActivityList;
    use timekeeper::libs::clock::ManualClock;
    use timekeeper::libs::config::SessionConfig;
    use timekeeper::libs::session::{Session, Transition};

    /// Test context giving each test its own data directory and a clock
    /// parked at 2024-05-14 09:00:00.
    struct SessionTestContext {
        temp_dir: TempDir,
        clock: ManualClock,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            SessionTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                clock: ManualClock::new(at(9, 0, 0)),
            }
        }
    }

    impl SessionTestContext {
        fn open(&self) -> Session<ManualClock> {
            self.open_with(["A", "B"])
        }

        fn open_with<const N: usize>(&self, activities: [&str; N]) -> Session<ManualClock> {
            Session::open(
                self.clock.clone(),
                ActivityList::new(activities).unwrap(),
                self.temp_dir.path().join("data"),
                SessionConfig::default(),
            )
            .unwrap()
        }

        fn raw_file(&self) -> Option<String> {
            fs::read_to_string(self.temp_dir.path().join("data").join("raw").join("2024-05-14.txt")).ok()
        }

        fn log_file(&self) -> Option<String> {
            fs::read_to_string(self.temp_dir.path().join("data").join("2024-05-14.txt")).ok()
        }
    }

    fn at(hour: u32, min: u32, sec: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 14, hour, min, sec).unwrap()
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_open_empty_day(ctx: &mut SessionTestContext) {
        let session = ctx.open();
        assert!(session.is_idle());
        assert!(session.history().is_empty());
        assert_eq!(session.total_minutes(), 0);
        assert_eq!(session.daily_log().day(), at(9, 0, 0).date_naive());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_start_from_idle(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();

        let transition = session.set_activity(Some("A")).unwrap();
        assert_eq!(
            transition,
            Transition::Started {
                activity: "A".to_string()
            }
        );
        assert_eq!(session.current_activity(), Some("A"));
        assert_eq!(session.current_start(), Some(at(9, 0, 0)));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_while_idle_is_ignored(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();

        assert_eq!(session.set_activity(None).unwrap(), Transition::Ignored);
        assert!(session.is_idle());
        assert!(ctx.raw_file().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_reclick_extends_start(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(5);

        let transition = session.set_activity(Some("A")).unwrap();
        assert_eq!(
            transition,
            Transition::Extended {
                activity: "A".to_string(),
                start: at(8, 59, 0),
            }
        );

        session.set_activity(Some("A")).unwrap();
        assert_eq!(session.current_start(), Some(at(8, 58, 0)));
        assert!(session.history().is_empty());
        assert!(ctx.raw_file().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_extension_counts_towards_commit(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(5);
        session.set_activity(Some("A")).unwrap();

        let Transition::Committed { interval, .. } = session.set_activity(Some("B")).unwrap() else {
            panic!("expected a commit");
        };
        assert_eq!(interval.start, at(8, 59, 0));
        assert_eq!(interval.minutes, 1);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_quick_switch_discards_slice(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(5);

        let transition = session.set_activity(Some("B")).unwrap();
        assert_eq!(
            transition,
            Transition::Replaced {
                discarded: "A".to_string(),
                activity: "B".to_string(),
            }
        );
        assert_eq!(session.current_activity(), Some("B"));
        // The start is kept, so the misclicked seconds go to B
        assert_eq!(session.current_start(), Some(at(9, 0, 0)));
        assert!(session.history().is_empty());
        assert_eq!(session.total_for("A"), 0);
        assert!(ctx.raw_file().is_none());

        ctx.clock.advance_secs(60);
        let Transition::Committed { interval, .. } = session.set_activity(Some("A")).unwrap() else {
            panic!("expected a commit");
        };
        assert_eq!(interval.activity, "B");
        assert_eq!(interval.start, at(9, 0, 0));
        assert_eq!(interval.minutes, 1);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_switch_commits_interval(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(125);

        let Transition::Committed { interval, next } = session.set_activity(Some("B")).unwrap() else {
            panic!("expected a commit");
        };
        assert_eq!(interval.activity, "A");
        assert_eq!(interval.minutes, 2);
        assert_eq!(interval.end, at(9, 2, 5));
        assert_eq!(next.as_deref(), Some("B"));

        assert_eq!(session.total_for("A"), 2);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_activity(), Some("B"));
        assert_eq!(session.current_start(), Some(at(9, 2, 5)));

        assert_eq!(ctx.raw_file().unwrap(), "20240514-090000,20240514-090205,A\n");
        assert_eq!(
            ctx.log_file().unwrap(),
            "09:00 - 09:02 A                         0:02 h\n"
        );
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_threshold_is_inclusive(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(10);

        let Transition::Committed { interval, .. } = session.set_activity(Some("B")).unwrap() else {
            panic!("expected a commit");
        };
        assert_eq!(interval.minutes, 0);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.total_for("A"), 0);
        assert!(ctx.raw_file().is_some());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_below_threshold(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(9);

        assert_eq!(
            session.stop().unwrap(),
            Transition::Stopped {
                discarded: "A".to_string()
            }
        );
        assert!(session.is_idle());
        assert!(ctx.raw_file().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_commits(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(15 * 60);

        let Transition::Committed { interval, next } = session.stop().unwrap() else {
            panic!("expected a commit");
        };
        assert_eq!(interval.minutes, 15);
        assert_eq!(next, None);
        assert!(session.is_idle());
        assert_eq!(session.total_minutes(), 15);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_elapsed(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        assert_eq!(session.elapsed_seconds(), None);
        assert_eq!(session.elapsed_minutes(), None);

        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(75);
        assert_eq!(session.elapsed_seconds(), Some(75));
        assert_eq!(session.elapsed_minutes(), Some(1));
        assert_eq!(session.running_total_minutes(), 1);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_comma_is_rejected(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(120);

        assert!(session.set_activity(Some("B,C")).is_err());
        assert_eq!(session.current_activity(), Some("A"));
        assert!(session.history().is_empty());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_line_break_is_rejected(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(120);

        assert!(session.set_activity(Some("review\ncode")).is_err());
        assert!(session.set_activity(Some("  ")).is_err());
        assert_eq!(session.current_activity(), Some("A"));
        assert!(ctx.raw_file().is_none());

        session.stop().unwrap();
        drop(session);
        assert_eq!(ctx.open().history().len(), 1);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_name_is_trimmed(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("x ")).unwrap();
        ctx.clock.advance_secs(60);
        // Same activity once trimmed, so this extends instead of switching
        assert!(matches!(session.set_activity(Some(" x")).unwrap(), Transition::Extended { .. }));
        session.stop().unwrap();
        drop(session);

        let session = ctx.open();
        assert_eq!(session.history()[0].activity, "x");
        assert_eq!(session.total_for("x"), 2);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_failed_commit_can_be_retried(ctx: &mut SessionTestContext) {
        let log_path = ctx.temp_dir.path().join("data").join("2024-05-14.txt");
        fs::create_dir_all(&log_path).unwrap();

        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(5 * 60);

        assert!(session.set_activity(Some("B")).is_err());
        assert_eq!(session.current_activity(), Some("A"));
        assert!(session.history().is_empty());
        assert!(ctx.raw_file().is_none());

        fs::remove_dir(&log_path).unwrap();
        session.set_activity(Some("B")).unwrap();
        assert_eq!(session.total_for("A"), 5);
        ctx.clock.advance_secs(60);

        let report = session.finish().unwrap().unwrap();
        assert_eq!(report.intervals.len(), 2);
        assert_eq!(ctx.open().history().len(), 2);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_totals_match_history(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        for (activity, seconds) in [("A", 90), ("B", 5), ("A", 600), ("B", 3601), ("A", 30)] {
            session.set_activity(Some(activity)).unwrap();
            ctx.clock.advance_secs(seconds);
        }
        session.stop().unwrap();

        let from_history: u64 = session.history().iter().map(|interval| interval.minutes).sum();
        assert_eq!(session.total_minutes(), from_history);
        for (activity, minutes) in session.totals() {
            let expected: u64 = session
                .history()
                .iter()
                .filter(|interval| &interval.activity == activity)
                .map(|interval| interval.minutes)
                .sum();
            assert_eq!(*minutes, expected);
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_reopen_replays_history(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(15 * 60);
        session.set_activity(Some("B")).unwrap();
        ctx.clock.advance_secs(5 * 60);
        // Dropped without finish: B was running and is lost
        drop(session);

        let session = ctx.open();
        assert!(session.is_idle());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.total_for("A"), 15);
        assert_eq!(session.total_for("B"), 0);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_finish_empty_day(ctx: &mut SessionTestContext) {
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(3);

        assert!(session.finish().unwrap().is_none());
        assert!(ctx.raw_file().is_none());
        assert!(ctx.log_file().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_finish_writes_report(ctx: &mut SessionTestContext) {
        let mut session = ctx.open_with(["A", "testing a", "testing b"]);
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(30 * 60);
        session.set_activity(Some("testing a")).unwrap();
        ctx.clock.advance_secs(20 * 60);
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(10 * 60);

        let report = session.finish().unwrap().unwrap();
        let expected = "\
09:00 - 09:30 A                          0:30 h
09:30 - 09:50 testing a                  0:20 h
09:50 - 10:00 A                          0:10 h

Task breakdown:
A                          0:40 h   66%
testing a                  0:20 h   33%
total                      1:00 h  100%

Prefix breakdown:
testing                    0:20 h   33%

2 activity switches (2.0/h)
min 10.0 min, max 30.0 min, avg 20.0 min, std 8.2 min

";
        assert_eq!(report.render(), expected);
        assert_eq!(ctx.log_file().unwrap(), expected);
        assert_eq!(ctx.raw_file().unwrap().lines().count(), 3);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_interval_past_midnight_stays_on_session_day(ctx: &mut SessionTestContext) {
        ctx.clock.set(at(23, 59, 0));
        let mut session = ctx.open();
        session.set_activity(Some("A")).unwrap();
        ctx.clock.advance_secs(2 * 60);
        session.stop().unwrap();

        assert_eq!(ctx.raw_file().unwrap(), "20240514-235900,20240515-000100,A\n");
    }
}
