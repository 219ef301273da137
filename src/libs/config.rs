//! Configuration management for daytask.
//!
//! Settings live in `config.json` inside the application data directory (see
//! [`DataStorage`]). Every section is optional; a missing section, or a missing
//! file, means defaults.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use daytask::libs::config::Config;
//!
//! let config = Config::read()?;
//! let reminder = config.reminder.clone().unwrap_or_default();
//! println!("Polling every {} seconds", reminder.interval_secs);
//! println!("Tasks file: {}", config.tasks_file()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default name of the workbook holding the task table.
pub const TASKS_FILE_NAME: &str = "tasks.xlsx";

/// Where the task table is stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// Path of the `.xlsx` workbook backing the store.
    pub tasks_file: PathBuf,
}

/// Reminder loop settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReminderConfig {
    /// Seconds between two scans of the task table.
    ///
    /// Start times are compared at minute precision, so anything above 60 can
    /// skip a minute and miss tasks.
    pub interval_secs: u64,

    /// Seconds a notification stays on screen.
    pub notification_timeout: u64,
}

impl ReminderConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout)
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        ReminderConfig {
            interval_secs: 60,
            notification_timeout: 10,
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderConfig>,
}

impl Config {
    /// Reads configuration from the data directory.
    ///
    /// Returns the default configuration when no file exists. A file that exists
    /// but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if there is one.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Path of the task workbook: the configured one, or `tasks.xlsx` in the data directory.
    pub fn tasks_file(&self) -> Result<PathBuf> {
        match &self.store {
            Some(store) => Ok(store.tasks_file.clone()),
            None => Ok(DataStorage::new().get_path(TASKS_FILE_NAME)?),
        }
    }

    /// Interactive setup wizard.
    ///
    /// Starts from the current configuration, lets the user pick the sections to
    /// edit and prompts for each value with the current one pre-filled.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleStore.to_string(), Message::ConfigModuleReminder.to_string()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match selection {
                0 => {
                    let default = config.tasks_file()?;
                    msg_print!(Message::ConfigModuleStore);
                    let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTasksFile.to_string())
                        .default(default.display().to_string())
                        .interact_text()?;
                    config.store = Some(StoreConfig {
                        tasks_file: PathBuf::from(tasks_file),
                    });
                }
                1 => {
                    let default = config.reminder.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleReminder);
                    config.reminder = Some(ReminderConfig {
                        interval_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptReminderInterval.to_string())
                            .default(default.interval_secs)
                            .interact_text()?,
                        notification_timeout: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptNotificationTimeout.to_string())
                            .default(default.notification_timeout)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
