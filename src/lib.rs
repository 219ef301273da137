//! # daytask
//!
//! Weekly task planner persisted to a spreadsheet, with desktop reminders.
//!
//! ## Features
//!
//! - **Task Store**: create, update, delete and list tasks kept in an `.xlsx` file
//! - **Reminders**: a background loop notifies tasks whose start time has come
//! - **Data Export**: CSV, JSON and Excel snapshots of the whole table
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daytask::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
