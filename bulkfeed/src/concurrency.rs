//! Signaling primitives for worker coordination.
//!
//! Abstracts tokio's watch channels into a shutdown signal shared by every
//! parse worker and bulk writer of a run. The signal carries a boolean so
//! receivers can poll the current state between lines or rows without
//! awaiting.

use tokio::sync::watch;

const SHUTDOWN_DEFAULT: bool = false;

/// Transmitter side of the run-wide shutdown signal.
pub type ShutdownTx = watch::Sender<bool>;

/// Receiver side of the run-wide shutdown signal.
pub type ShutdownRx = watch::Receiver<bool>;

/// Creates the run-wide shutdown channel, initially not signaled.
pub fn create_shutdown() -> (ShutdownTx, ShutdownRx) {
    watch::channel(SHUTDOWN_DEFAULT)
}

/// True when the shutdown signal has fired.
pub fn is_shutdown(rx: &ShutdownRx) -> bool {
    *rx.borrow()
}
