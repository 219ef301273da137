//! Display implementation for application messages.
//!
//! Keeps all user-facing text in one place. Variants carrying data interpolate
//! it here, so call sites only pick the variant:
//!
//! ```rust
//! use daytask::libs::messages::Message;
//!
//! let message = Message::ExportCompleted("tasks.csv".to_string());
//! assert_eq!(message.to_string(), "Export completed successfully: tasks.csv");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created successfully (id: {})", id),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskTitleRequired => "Task title must not be empty".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TasksCount(count) => format!("{} task(s)", count),
            Message::TasksSaved(path) => format!("Tasks saved to {}", path),
            Message::CurrentTaskState => "Current task:".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete task '{}'?", title),
            Message::TaskDeletionCancelled => "Task deletion cancelled.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleStore => "Storage settings".to_string(),
            Message::ConfigModuleReminder => "Reminder settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select the settings to configure".to_string(),
            Message::PromptTasksFile => "Tasks file (.xlsx)".to_string(),
            Message::PromptReminderInterval => "Seconds between reminder checks".to_string(),
            Message::PromptNotificationTimeout => "Seconds a notification stays visible".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),

            // === REMINDER MESSAGES ===
            Message::ReminderTitle(title) => format!("Reminder: {}", title),
            Message::ReminderBody {
                day,
                start_time,
                end_time,
                description,
            } => format!("Day: {}\nFrom {} to {}\n{}", day, start_time, end_time, description),
            Message::WatcherStarted { interval_secs, tasks, path } => {
                format!("Watching {} task(s) from {} every {} seconds. Press Ctrl-C to stop.", tasks, path, interval_secs)
            }
            Message::WatcherStopped => "Watcher stopped successfully".to_string(),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl-C, shutting down...".to_string(),
            Message::WatcherCtrlCListenFailed(error) => format!("Failed to listen for Ctrl-C: {}", error),
            Message::WatcherSignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::ReminderTaskPanicked(error) => format!("Reminder task panicked: {}", error),
        };

        write!(f, "{}", text)
    }
}
