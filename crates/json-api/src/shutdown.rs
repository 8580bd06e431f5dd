//! Graceful shutdown signal handling

use std::{fmt, io};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

#[derive(Debug, Clone, Copy)]
enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CtrlC => f.write_str("ctrl_c"),
            #[cfg(unix)]
            Self::Terminate => f.write_str("terminate"),
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?;

    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::CtrlC)?;

            Ok(ShutdownSignal::CtrlC)
        }
        _ = terminate.recv() => Ok(ShutdownSignal::Terminate),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)?;

    Ok(ShutdownSignal::CtrlC)
}

/// Stops the server gracefully once Ctrl+C or SIGTERM arrives. In-flight
/// purchases finish before the process exits.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let received = wait_for_signal().await?;

    info!(signal = %received, "shutdown signal received");

    handle.stop_graceful(None);

    Ok(())
}
