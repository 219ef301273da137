use crate::libs::config::Config;
use crate::libs::daemon;
use crate::libs::notifier::DesktopNotifier;
use crate::store::TaskStore;
use anyhow::Result;
use std::sync::Arc;

// Runs the reminder loop in the foreground until interrupted.
pub async fn cmd(store: TaskStore) -> Result<()> {
    let config = Config::read()?.reminder.unwrap_or_default();
    daemon::run_with_signal_handling(Arc::new(store), Arc::new(DesktopNotifier), config).await
}
