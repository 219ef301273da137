//! Notification sink used by the reminder loop.

use crate::libs::data_storage::APP_NAME;
use anyhow::Result;
use notify_rust::Timeout;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub timeout: Duration,
}

/// Delivers notifications. Delivery is fire-and-forget: callers log failures and move on.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<()>;
}

/// Shows notifications through the desktop notification service.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        let timeout = u32::try_from(notification.timeout.as_millis()).unwrap_or(u32::MAX);
        notify_rust::Notification::new()
            .appname(APP_NAME)
            .summary(&notification.title)
            .body(&notification.body)
            .timeout(Timeout::Milliseconds(timeout))
            .show()?;
        Ok(())
    }
}
