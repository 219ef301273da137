//! File-backed task storage.
//!
//! The store keeps the whole task table in memory and mirrors it to a single
//! spreadsheet file after every mutation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daytask::libs::task::{Priority, Repeat, TaskDraft, Weekday};
//! use daytask::store::TaskStore;
//!
//! let store = TaskStore::open("tasks.xlsx");
//! let id = store.create(TaskDraft {
//!     title: "Standup".to_string(),
//!     description: String::new(),
//!     day: Weekday::Sunday,
//!     start_time: "09:00".to_string(),
//!     end_time: "09:15".to_string(),
//!     priority: Priority::High,
//!     repeat: Repeat::Daily,
//! })?;
//! assert!(store.get_all().iter().any(|task| task.id == id));
//! # Ok::<(), daytask::store::StoreError>(())
//! ```

pub mod sheet;
pub mod tasks;

pub use tasks::TaskStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access the tasks file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read the tasks workbook: {0}")]
    Read(#[from] calamine::XlsxError),
    #[error("failed to write the tasks workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
