//! Foreground runner for the `watch` command.
//!
//! Starts the reminder service and keeps it running until the process receives a
//! termination signal (SIGTERM/SIGINT on Unix, Ctrl-C on Windows), then stops it
//! and waits for it to finish.

use crate::libs::config::ReminderConfig;
use crate::libs::messages::Message;
use crate::libs::notifier::Notifier;
use crate::libs::reminder::ReminderService;
use crate::store::TaskStore;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use std::sync::Arc;

/// Runs the reminder loop until a shutdown signal arrives.
pub async fn run_with_signal_handling(store: Arc<TaskStore>, notifier: Arc<dyn Notifier>, config: ReminderConfig) -> Result<()> {
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(_) => {
                    msg_error!(Message::FailedToCreateSigtermHandler);
                    return;
                }
            };
            let mut sigint = match signal(SignalKind::interrupt()) {
                Ok(sigint) => sigint,
                Err(_) => {
                    msg_error!(Message::FailedToCreateSigintHandler);
                    return;
                }
            };

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        crate::msg_warning!(Message::WatcherSignalHandlingNotSupported);
        drop(shutdown_tx);
    }

    msg_info!(Message::WatcherStarted {
        interval_secs: config.interval().as_secs(),
        tasks: store.len(),
        path: store.path().display().to_string(),
    });

    let handle = ReminderService::new(store, notifier, config).spawn();

    // Without a signal listener the loop runs until the process exits.
    if shutdown_rx.await.is_err() {
        std::future::pending::<()>().await;
    }

    match handle.stop().await {
        Ok(()) => msg_success!(Message::WatcherStopped),
        Err(e) => msg_error!(Message::ReminderTaskPanicked(e.to_string())),
    }

    Ok(())
}
