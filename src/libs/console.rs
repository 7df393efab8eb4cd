//! Terminal presentation for an interactive session.
//!
//! The console only turns user input into [`Selection`]s and session state
//! into text; switching logic stays in [`Session`].

use crate::libs::activity::ActivityList;
use crate::libs::clock::Clock;
use crate::libs::formatter::{format_clock, format_duration, format_duration_with_seconds};
use crate::libs::messages::Message;
use crate::libs::session::{Session, Transition};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_warning};

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Activity(String),
    Stop,
    Quit,
    /// An empty line: redraw the activity table.
    Redraw,
    Unknown(String),
}

/// What the event loop does after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interprets a line of input against the activity list.
///
/// Accepts the 1-based number of an activity, its exact name, `s`/`stop`,
/// or `q`/`quit`.
pub fn parse_selection(input: &str, activities: &ActivityList) -> Selection {
    let input = input.trim();
    match input {
        "" => Selection::Redraw,
        "s" | "stop" => Selection::Stop,
        "q" | "quit" | "exit" => Selection::Quit,
        _ => {
            if let Ok(number) = input.parse::<usize>() {
                return match number.checked_sub(1).and_then(|index| activities.get(index)) {
                    Some(name) => Selection::Activity(name.to_string()),
                    None => Selection::Unknown(input.to_string()),
                };
            }
            if activities.contains(input) {
                Selection::Activity(input.to_string())
            } else {
                Selection::Unknown(input.to_string())
            }
        }
    }
}

/// Applies a selection to the session and prints the outcome.
///
/// A switch that fails is reported and the session keeps running in the
/// state it had before, so the final report can still be written.
pub fn handle<C: Clock>(session: &mut Session<C>, selection: Selection) -> Flow {
    let result = match selection {
        Selection::Activity(name) => session.set_activity(Some(&name)),
        Selection::Stop => session.stop(),
        Selection::Quit => return Flow::Quit,
        Selection::Redraw => {
            draw(session);
            return Flow::Continue;
        }
        Selection::Unknown(input) => {
            msg_warning!(Message::UnknownSelection(input));
            return Flow::Continue;
        }
    };

    match result {
        Ok(transition) => {
            if let Some(message) = describe(&transition) {
                msg_info!(message);
            }
        }
        Err(e) => msg_error!(Message::SwitchFailed(format!("{:#}", e))),
    }
    Flow::Continue
}

/// The one-line status shown on every refresh tick.
pub fn status<C: Clock>(session: &Session<C>) -> Message {
    match (session.current_activity(), session.elapsed_seconds()) {
        (Some(activity), Some(elapsed)) => Message::StatusRunning {
            activity: activity.to_string(),
            elapsed: format_duration_with_seconds(elapsed),
            total: format_duration(session.running_total_minutes()),
        },
        _ => Message::StatusIdle,
    }
}

/// The message describing a transition to the user.
pub fn describe(transition: &Transition) -> Option<Message> {
    match transition {
        Transition::Ignored => None,
        Transition::Started { activity } => Some(Message::ActivityStarted(activity.clone())),
        Transition::Extended { activity, start } => Some(Message::ActivityExtended(activity.clone(), format_clock(start))),
        Transition::Replaced { discarded, activity } => Some(Message::ActivityReplaced {
            discarded: discarded.clone(),
            activity: activity.clone(),
        }),
        Transition::Committed { interval, .. } => Some(Message::IntervalCommitted {
            activity: interval.activity.clone(),
            duration: format_duration(interval.minutes),
        }),
        Transition::Stopped { discarded } => Some(Message::ActivityStopped(discarded.clone())),
    }
}

/// Prints the activity table with today's totals.
pub fn draw<C: Clock>(session: &Session<C>) {
    View::activities(session.activities(), session.totals(), session.current_activity());
}
