//! OS signals that stop newsdesk

use std::fmt;

use newsdesk_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Which signal asked us to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Forward the first shutdown signal as [`Message::Quit`].
///
/// The TUI also sees Ctrl+C as a key press; this path covers headless runs
/// and `kill`.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => {
                info!("{} received, quitting", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Engine already stopped, {} ignored", signal);
                }
            }
            Err(e) => warn!("Signals will not stop newsdesk: {}", e),
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).context("Installing SIGINT handler")?;
    let mut sigterm = signal(SignalKind::terminate()).context("Installing SIGTERM handler")?;

    Ok(tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .context("Listening for Ctrl+C")?;
    Ok(ShutdownSignal::Interrupt)
}
