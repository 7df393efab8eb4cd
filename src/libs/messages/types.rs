#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionOpened {
        day: String,
        intervals: usize,
        total: String,
    },
    SessionShuttingDown,
    SessionEmpty,

    // === ACTIVITY MESSAGES ===
    ActivityStarted(String),
    ActivityExtended(String, String), // activity, new start time
    ActivityReplaced {
        discarded: String,
        activity: String,
    },
    IntervalCommitted {
        activity: String,
        duration: String,
    },
    ActivityStopped(String),
    UnknownSelection(String),
    SwitchFailed(String),

    // === STATUS MESSAGES ===
    StatusIdle,
    StatusRunning {
        activity: String,
        elapsed: String,
        total: String,
    },
    ActivitiesHeader(String), // date
    SessionHelp,

    // === REPORT MESSAGES ===
    ReportWritten(String),       // path
    ReportEmptyForDate(String),  // date
    InvalidDate(String),         // input

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleActivities,
    ConfigModuleStorage,
    ConfigModuleSession,

    // === SIGNAL MESSAGES ===
    ReceivedCtrlC,
    CtrlCListenFailed(String),
    InputClosed,

    // === PROMPTS ===
    PromptSelectModules,
    PromptActivities,
    PromptDataDir,
    PromptMinCommitSeconds,
    PromptReclickExtension,
    PromptRefreshInterval,
    PromptReplayPolicy,

    // === ERROR LOGGING ===
    CommandFailed(String), // error
}
