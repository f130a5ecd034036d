//! Cancellation token and process signal wiring

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Cloneable stop request shared between the signal listener and the stream
///
/// Once triggered it stays triggered.
#[derive(Debug, Clone)]
pub struct ShutdownToken {
    state: Arc<watch::Sender<bool>>,
}

impl ShutdownToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { state: Arc::new(tx) }
    }

    /// Request shutdown
    pub fn trigger(&self) {
        self.state.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.state.borrow()
    }

    /// Resolves once shutdown has been requested, immediately if it already was
    pub async fn cancelled(&self) {
        let mut rx = self.state.subscribe();
        // the sender lives in `self`, so the channel cannot close here
        let _ = rx.wait_for(|stopped| *stopped).await;
    }
}

impl Default for ShutdownToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, stopping order stream...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, stopping order stream...");
        },
    }
}

/// Trigger `token` when the process receives Ctrl+C or SIGTERM
pub fn spawn_signal_listener(token: ShutdownToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        shutdown_signal().await;
        token.trigger();
    })
}
