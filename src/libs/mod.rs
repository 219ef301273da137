//! Core library modules for daytask.
//!
//! - **Data model**: [`task`] defines tasks and their closed choice sets
//! - **Reminders**: [`reminder`] polls the store, [`notifier`] delivers, [`daemon`] runs it in the foreground
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Output**: [`export`] to CSV/JSON/Excel, [`view`] for console tables

pub mod config;
pub mod daemon;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod notifier;
pub mod reminder;
pub mod task;
pub mod view;
