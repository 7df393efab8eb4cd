//! # Timekeeper - Activity Timer
//!
//! A command-line utility that times named activities, records each finished
//! stretch of work to a daily log, and writes a breakdown report when the
//! session ends.
//!
//! ## Features
//!
//! - **Activity Switching**: One running activity at a time, with misclick protection
//! - **Daily Logs**: Append-only raw interval file plus a human-readable log per day
//! - **Breakdown Reports**: Per-activity and per-prefix totals, switch rate, statistics
//! - **Resumable Days**: Earlier runs of the same day are replayed at startup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timekeeper::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
