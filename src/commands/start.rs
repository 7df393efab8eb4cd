//! Interactive timing session.
//!
//! Three event sources drive the session:
//! - lines typed on stdin, read on a dedicated thread
//! - a refresh tick that redraws the status line
//! - Ctrl+C
//!
//! Quitting by any of these runs the shutdown sequence once: the running
//! activity is committed and the day's report is written. A switch that
//! fails to reach the disk is reported without ending the session.

use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::console::{self, parse_selection, Flow};
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::time::{self, Duration, MissedTickBehavior};

const MIN_REFRESH_MS: u64 = 50;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Line-delimited file of activity names
    #[arg(long, short)]
    activities: Option<PathBuf>,

    /// Directory for the daily log files
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
pub async fn cmd(start_args: StartArgs) -> Result<()> {
    let config = Config::read()?;
    let activities = config.activity_list(start_args.activities.as_deref())?;
    let session_config = config.session();
    let refresh = Duration::from_millis(session_config.refresh_interval_ms.max(MIN_REFRESH_MS));

    let mut session = Session::open(SystemClock, activities, config.data_dir(start_args.data_dir.as_deref()), session_config)?;
    msg_info!(Message::SessionOpened {
        day: session.daily_log().day().to_string(),
        intervals: session.history().len(),
        total: format_duration(session.total_minutes()),
    });
    console::draw(&session);
    msg_print!(Message::SessionHelp);

    let mut lines = spawn_stdin_reader();
    let mut ticker = time::interval(refresh);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut ctrl_c_armed = true;
    let mut last_status = String::new();

    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    msg_info!(Message::InputClosed);
                    break;
                };
                last_status.clear();
                let selection = parse_selection(&line, session.activities());
                if console::handle(&mut session, selection) == Flow::Quit {
                    break;
                }
            }
            _ = ticker.tick() => {
                let status = console::status(&session).to_string();
                if status != last_status {
                    print!("\r{:<60}", status);
                    io::stdout().flush()?;
                    last_status = status;
                }
            }
            result = &mut ctrl_c, if ctrl_c_armed => {
                match result {
                    Ok(()) => {
                        msg_info!(Message::ReceivedCtrlC);
                        break;
                    }
                    Err(e) => {
                        msg_error!(Message::CtrlCListenFailed(e.to_string()));
                        ctrl_c_armed = false;
                    }
                }
            }
        }
    }

    println!();
    msg_info!(Message::SessionShuttingDown);
    let log_path = session.daily_log().log_path();
    match session.finish()? {
        Some(_) => msg_success!(Message::ReportWritten(log_path.display().to_string())),
        None => msg_info!(Message::SessionEmpty),
    }

    Ok(())
}

/// Forwards stdin lines to the event loop.
///
/// Runs on a plain thread: a blocking read would otherwise keep the runtime
/// from shutting down after the session ends.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
