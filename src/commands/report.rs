//! Rebuilds the breakdown report of a day from its raw file.
//!
//! Useful after a crash, where the session never reached its shutdown
//! sequence, or to look at an earlier day.

use crate::libs::config::Config;
use crate::libs::interval::totals;
use crate::libs::messages::Message;
use crate::libs::report::Report;
use crate::libs::storage::DailyLog;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Day to report on
    #[arg(long, short, default_value = "today", help = "Date to report on (YYYY-MM-DD or 'today')")]
    date: String,

    /// Overwrite the day's readable log with the report instead of printing it
    #[arg(long, short)]
    write: bool,

    /// Directory holding the daily log files
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let day = parse_day(&report_args.date)?;
    let config = Config::read()?;
    let activities = config.activity_list(None)?;
    let log = DailyLog::new(config.data_dir(report_args.data_dir.as_deref()), day);

    let history = log.replay(config.session().replay_policy)?;
    let Some(report) = Report::build(&history, &totals(&history), &activities) else {
        msg_info!(Message::ReportEmptyForDate(day.to_string()));
        return Ok(());
    };

    if report_args.write {
        log.write_log(&report.render())?;
        msg_success!(Message::ReportWritten(log.log_path().display().to_string()));
    } else {
        msg_print!(report.render());
    }

    Ok(())
}

fn parse_day(input: &str) -> Result<NaiveDate> {
    if input == "today" {
        return Ok(Local::now().date_naive());
    }
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(day) => Ok(day),
        Err(_) => msg_bail_anyhow!(Message::InvalidDate(input.to_string())),
    }
}
