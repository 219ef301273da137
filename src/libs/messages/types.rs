//! Catalog of user-facing messages.
//!
//! Every piece of text the application shows (console output, prompts, error
//! descriptions and notification contents) is a variant of [`Message`]. The text
//! itself lives in the `Display` implementation in `display.rs`.

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String), // id
    TaskUpdated,
    TaskDeleted,
    TaskNotFoundWithId(String),
    TaskTitleRequired,
    NoChangesDetected,
    NoTasksFound,
    TasksCount(usize),
    TasksSaved(String), // path
    CurrentTaskState,
    ConfirmDeleteTask(String), // title
    TaskDeletionCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleStore,
    ConfigModuleReminder,

    // === PROMPTS ===
    PromptSelectModules,
    PromptTasksFile,
    PromptReminderInterval,
    PromptNotificationTimeout,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === REMINDER MESSAGES ===
    ReminderTitle(String), // task title
    ReminderBody {
        day: String,
        start_time: String,
        end_time: String,
        description: String,
    },
    WatcherStarted {
        interval_secs: u64,
        tasks: usize,
        path: String,
    },
    WatcherStopped,
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String), // error
    WatcherSignalHandlingNotSupported,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    ReminderTaskPanicked(String), // error
}
