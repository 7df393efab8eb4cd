use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::console;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ActivitiesArgs {
    /// Line-delimited file of activity names
    #[arg(long, short)]
    activities: Option<PathBuf>,

    /// Directory holding the daily log files
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

// Opening a session only reads today's raw file; nothing is written here.
pub fn cmd(activities_args: ActivitiesArgs) -> Result<()> {
    let config = Config::read()?;
    let activities = config.activity_list(activities_args.activities.as_deref())?;
    let session = Session::open(
        SystemClock,
        activities,
        config.data_dir(activities_args.data_dir.as_deref()),
        config.session(),
    )?;

    msg_print!(Message::ActivitiesHeader(session.daily_log().day().to_string()), true);
    console::draw(&session);
    msg_print!(format!("total {}", format_duration(session.total_minutes())));
    Ok(())
}
