//! Cooperative cancellation.
//!
//! A [`CancellationSignal`] is handed to long-running operations by the
//! timeout runners. The operation polls it at loop boundaries (or awaits
//! [`CancellationSignal::cancelled`]) and stops once it is raised. Nothing
//! is ever aborted forcibly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tokio::sync::Notify;

/// Error returned by [`CancellationSignal::check`] once cancellation has been
/// requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation was cancelled")]
pub struct Cancelled;

#[derive(Debug, Default)]
struct SignalState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// A shared, cloneable cancellation flag.
///
/// All clones observe the same flag. Raising it is idempotent.
///
/// # Examples
///
/// ```rust
/// use outcomes::timing::CancellationSignal;
///
/// let signal = CancellationSignal::new();
/// let observer = signal.clone();
/// assert!(observer.check().is_ok());
///
/// signal.cancel();
/// assert!(observer.is_cancellation_requested());
/// assert!(observer.check().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationSignal {
    state: Arc<SignalState>,
}

impl CancellationSignal {
    /// Creates a signal that has not been raised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the signal and wakes every task awaiting it.
    ///
    /// Returns `true` if this call raised it, `false` if it was already raised.
    pub fn cancel(&self) -> bool {
        let first = !self.state.cancelled.swap(true, Ordering::SeqCst);
        if first {
            self.state.notify.notify_waiters();
        }
        first
    }

    /// Returns `true` once cancellation has been requested.
    #[must_use]
    pub fn is_cancellation_requested(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Returns `Err(Cancelled)` once cancellation has been requested, so an
    /// operation can bail out with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the signal has been raised.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancellation_requested() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Completes once the signal has been raised.
    pub async fn cancelled(&self) {
        // Registered before the flag check so a concurrent `cancel` is not missed.
        let notified = self.state.notify.notified();
        if self.is_cancellation_requested() {
            return;
        }
        notified.await;
    }
}
