//! Display implementation for timekeeper application messages.
//!
//! All user-facing text lives here, in one match over [`Message`]. Callers
//! never format text themselves; they pick a variant and hand it to one of
//! the `msg_*` macros:
//!
//! ```rust,ignore
//! use timekeeper::{msg_info, msg_success};
//! use timekeeper::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::ActivityStarted("programming".to_string()));
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SessionOpened { day, intervals, total } => {
                format!("Session for {}: {} intervals recorded so far, {} in total", day, intervals, total)
            }
            Message::SessionShuttingDown => "Stopping session and writing the report...".to_string(),
            Message::SessionEmpty => "Nothing was recorded today, no report written".to_string(),

            // === ACTIVITY MESSAGES ===
            Message::ActivityStarted(activity) => format!("Started '{}'", activity),
            Message::ActivityExtended(activity, start) => format!("'{}' is already running, start moved back to {}", activity, start),
            Message::ActivityReplaced { discarded, activity } => {
                format!("Switched from '{}' to '{}' too quickly, the time now counts for '{}'", discarded, activity, activity)
            }
            Message::IntervalCommitted { activity, duration } => format!("Recorded '{}' ({})", activity, duration),
            Message::ActivityStopped(activity) => format!("Stopped '{}' before anything was recorded", activity),
            Message::UnknownSelection(input) => format!("Unknown selection '{}'", input),
            Message::SwitchFailed(error) => format!("Could not switch activity: {}", error),

            // === STATUS MESSAGES ===
            Message::StatusIdle => "Idle".to_string(),
            Message::StatusRunning { activity, elapsed, total } => format!("{} | {} | total {}", activity, elapsed, total),
            Message::ActivitiesHeader(date) => format!("Activities for {}", date),
            Message::SessionHelp => "Enter a number to switch activity, 's' to stop, 'q' to quit".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportWritten(path) => format!("Report written to {}", path),
            Message::ReportEmptyForDate(date) => format!("No intervals recorded for {}", date),
            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD", input),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleActivities => "Activities".to_string(),
            Message::ConfigModuleStorage => "Storage".to_string(),
            Message::ConfigModuleSession => "Session".to_string(),

            // === SIGNAL MESSAGES ===
            Message::ReceivedCtrlC => "Received Ctrl+C".to_string(),
            Message::CtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::InputClosed => "Input closed".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptActivities => "Enter activities, separated by commas".to_string(),
            Message::PromptDataDir => "Enter the data directory".to_string(),
            Message::PromptMinCommitSeconds => "Enter minimum seconds before a switch is recorded".to_string(),
            Message::PromptReclickExtension => "Enter seconds to extend the running activity on re-select".to_string(),
            Message::PromptRefreshInterval => "Enter status refresh interval (milliseconds)".to_string(),
            Message::PromptReplayPolicy => "Select how unreadable raw lines are handled".to_string(),

            // === ERROR LOGGING ===
            Message::CommandFailed(error) => format!("Error: {}", error),
        };

        write!(f, "{}", text)
    }
}
