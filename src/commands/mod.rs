pub mod activities;
pub mod init;
pub mod report;
pub mod start;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start an interactive timing session")]
    Start(start::StartArgs),
    #[command(about = "Show the breakdown report for a day")]
    Report(report::ReportArgs),
    #[command(about = "List activities with today's totals")]
    Activities(activities::ActivitiesArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start(args) => start::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Activities(args) => activities::cmd(args),
        }
    }
}
