//! Application configuration management.
//!
//! Configuration is stored as pretty-printed JSON in `config.json` inside the
//! platform-specific application directory resolved by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\timekeeper\config.json`
//! - **macOS**: `~/Library/Application Support/timekeeper/config.json`
//! - **Linux**: `~/.local/share/timekeeper/config.json`
//!
//! Every field is optional. A missing file, or a missing field, falls back to
//! the built-in defaults, so timekeeper runs without any setup at all.
//!
//! ## Example
//!
//! ```json
//! {
//!   "activities": ["review code", "review docs", "meetings"],
//!   "data_dir": "/home/me/timekeeper",
//!   "session": {
//!     "min_commit_seconds": 10,
//!     "reclick_extension_seconds": 60,
//!     "refresh_interval_ms": 500,
//!     "replay_policy": "skip"
//!   }
//! }
//! ```

use super::data_storage::DataStorage;
use crate::libs::activity::ActivityList;
use crate::libs::messages::Message;
use crate::libs::storage::{ReplayPolicy, DEFAULT_DATA_DIR};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Activities file picked up from the working directory when nothing else
/// names a list.
pub const ACTIVITIES_FILE_NAME: &str = "activities.txt";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Session timing and replay settings.
///
/// ## Thresholds
///
/// - **`min_commit_seconds`**: switching away from an activity sooner than
///   this discards the slice instead of recording it, so a misclick never
///   shows up in the log.
/// - **`reclick_extension_seconds`**: clicking the activity that is already
///   running moves its start back by this much.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Minimum elapsed seconds before a switch records an interval.
    pub min_commit_seconds: u64,

    /// Seconds the start of the running activity moves back when it is
    /// selected again.
    pub reclick_extension_seconds: u64,

    /// Status refresh period of the interactive front-end, in milliseconds.
    pub refresh_interval_ms: u64,

    /// Handling of unreadable lines when today's raw file is replayed.
    pub replay_policy: ReplayPolicy,
}

impl Default for SessionConfig {
    /// Default values:
    /// - 10 seconds before a switch is committed
    /// - 60 seconds start extension on re-click
    /// - 500ms status refresh
    /// - strict replay
    fn default() -> Self {
        SessionConfig {
            min_commit_seconds: 10,
            reclick_extension_seconds: 60,
            refresh_interval_ms: 500,
            replay_policy: ReplayPolicy::Strict,
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Activity names, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,

    /// Line-delimited file to read activity names from. Takes precedence over
    /// `activities`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities_file: Option<PathBuf>,

    /// Directory holding the daily log files. Defaults to `data` in the
    /// working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionConfig>,
}

impl Config {
    /// Reads configuration from the application directory.
    ///
    /// A missing file yields [`Config::default`]; a file that exists but
    /// cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Session settings, or the defaults if none are configured.
    pub fn session(&self) -> SessionConfig {
        self.session.clone().unwrap_or_default()
    }

    /// Resolves the data directory. An explicit override wins.
    pub fn data_dir(&self, data_dir_override: Option<&Path>) -> PathBuf {
        data_dir_override
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Resolves the activity list for a session.
    ///
    /// Sources, first match wins:
    /// 1. the file given on the command line
    /// 2. `activities_file` from the configuration
    /// 3. `activities` from the configuration
    /// 4. `activities.txt` in the working directory
    /// 5. the built-in defaults
    pub fn activity_list(&self, file_override: Option<&Path>) -> Result<ActivityList> {
        if let Some(path) = file_override.or(self.activities_file.as_deref()) {
            return Ok(ActivityList::from_file(path)?);
        }
        if let Some(names) = &self.activities {
            return Ok(ActivityList::new(names)?);
        }
        let local_file = Path::new(ACTIVITIES_FILE_NAME);
        if local_file.exists() {
            return Ok(ActivityList::from_file(local_file)?);
        }
        Ok(ActivityList::default())
    }

    /// Runs the interactive setup wizard, starting from the current
    /// configuration.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = [
            ConfigModule {
                key: "activities".to_string(),
                name: "Activities".to_string(),
            },
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "session".to_string(),
                name: "Session".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "activities" => {
                    msg_print!(Message::ConfigModuleActivities);
                    let current = config
                        .activities
                        .clone()
                        .unwrap_or_else(|| ActivityList::default().names().to_vec())
                        .join(", ");
                    let answer: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptActivities.to_string())
                        .default(current)
                        .interact_text()?;
                    // Validate before storing so a bad name fails here, not at startup.
                    let list = ActivityList::new(answer.split(','))?;
                    config.activities = Some(list.names().to_vec());
                }
                "storage" => {
                    msg_print!(Message::ConfigModuleStorage);
                    let current = config.data_dir(None).display().to_string();
                    let answer: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDataDir.to_string())
                        .default(current)
                        .interact_text()?;
                    config.data_dir = Some(PathBuf::from(answer));
                }
                "session" => {
                    let default = config.session();
                    msg_print!(Message::ConfigModuleSession);
                    let policies = [ReplayPolicy::Strict, ReplayPolicy::Skip];
                    let policy_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptReplayPolicy.to_string())
                        .items(&["strict", "skip"])
                        .default(policies.iter().position(|p| *p == default.replay_policy).unwrap_or(0))
                        .interact()?;
                    config.session = Some(SessionConfig {
                        min_commit_seconds: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMinCommitSeconds.to_string())
                            .default(default.min_commit_seconds)
                            .interact_text()?,
                        reclick_extension_seconds: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptReclickExtension.to_string())
                            .default(default.reclick_extension_seconds)
                            .interact_text()?,
                        refresh_interval_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRefreshInterval.to_string())
                            .default(default.refresh_interval_ms)
                            .interact_text()?,
                        replay_policy: policies[policy_index],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
