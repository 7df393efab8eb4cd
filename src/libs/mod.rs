//! Core library modules for the timekeeper application.
//!
//! ## Layout
//!
//! - **Engine**: [`session`] state machine, [`interval`] records, [`activity`] lists
//! - **Persistence**: [`storage`] daily files, [`timestamp`] codec
//! - **Reporting**: [`report`] breakdown, [`stats`], [`formatter`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`clock`], [`messages`]
//! - **Presentation**: [`console`], [`view`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timekeeper::libs::activity::ActivityList;
//! use timekeeper::libs::clock::SystemClock;
//! use timekeeper::libs::config::SessionConfig;
//! use timekeeper::libs::session::Session;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut session = Session::open(SystemClock, ActivityList::default(), "data", SessionConfig::default())?;
//! session.set_activity(Some("programming"))?;
//! session.finish()?;
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod clock;
pub mod config;
pub mod console;
pub mod data_storage;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod report;
pub mod session;
pub mod stats;
pub mod storage;
pub mod timestamp;
pub mod view;
