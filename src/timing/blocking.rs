//! Runners that block the calling thread for at most the deadline.
//!
//! The operation runs on a dedicated background thread while the caller waits
//! on a channel with a deadline. A plain `FnOnce() -> R` cannot be preempted:
//! when the deadline fires the caller gets a timeout outcome, but the
//! background thread keeps running until the operation returns on its own.
//! Cancellation-aware operations receive a [`CancellationSignal`] that is
//! raised at the deadline so they can stop early.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use super::{CancellationSignal, DEFAULT_THREAD_NAME, TIMEOUT_MESSAGE};
use crate::outcome::{Fault, Outcome, Try, attempt};

/// Runs a blocking operation with a deadline.
///
/// Returns a success with the operation's value, an exception carrying the
/// root fault if it panicked, or a failure with the message
/// `"Timeout reached"` if the deadline fired first.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use outcomes::timing::run_with_timeout;
///
/// let quick = run_with_timeout(|| 2 + 2, Duration::from_secs(1));
/// assert_eq!(quick.into_data(), Some(4));
///
/// let slow = run_with_timeout(
///     || std::thread::sleep(Duration::from_millis(300)),
///     Duration::from_millis(20),
/// );
/// assert_eq!(slow.message(), "Timeout reached");
/// ```
pub fn run_with_timeout<R, F>(operation: F, timeout: Duration) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce() -> R + Send + 'static,
{
    race_on_thread(DEFAULT_THREAD_NAME, timeout, move |_| Outcome::success(operation()))
}

/// Runs a cancellation-aware blocking operation with a deadline.
///
/// The operation should poll the signal at loop boundaries; it is raised when
/// the deadline fires and again once the race has resolved.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use outcomes::timing::run_cancellable_with_timeout;
///
/// let outcome = run_cancellable_with_timeout(
///     |signal| {
///         let mut iterations = 0_u64;
///         while !signal.is_cancellation_requested() {
///             iterations += 1;
///             std::thread::sleep(Duration::from_millis(1));
///         }
///         iterations
///     },
///     Duration::from_millis(30),
/// );
/// assert!(outcome.is_failure());
/// ```
pub fn run_cancellable_with_timeout<R, F>(operation: F, timeout: Duration) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce(CancellationSignal) -> R + Send + 'static,
{
    race_on_thread(DEFAULT_THREAD_NAME, timeout, move |signal| {
        Outcome::success(operation(signal))
    })
}

/// Runs a blocking operation that already reports an outcome.
///
/// The operation's own outcome is returned unchanged when it finishes in
/// time.
pub fn run_outcome_with_timeout<R, F>(operation: F, timeout: Duration) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce() -> Outcome<R> + Send + 'static,
{
    race_on_thread(DEFAULT_THREAD_NAME, timeout, move |_| operation())
}

/// Cancellation-aware variant of [`run_outcome_with_timeout`].
pub fn run_cancellable_outcome_with_timeout<R, F>(operation: F, timeout: Duration) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce(CancellationSignal) -> Outcome<R> + Send + 'static,
{
    race_on_thread(DEFAULT_THREAD_NAME, timeout, operation)
}

pub(crate) fn race_on_thread<R, F>(thread_name: &str, timeout: Duration, operation: F) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce(CancellationSignal) -> Outcome<R> + Send + 'static,
{
    let signal = CancellationSignal::new();
    let worker_signal = signal.clone();
    let (sender, receiver) = mpsc::sync_channel(1);

    let spawned = thread::Builder::new()
        .name(thread_name.to_string())
        .spawn(move || {
            let captured = attempt(|| operation(worker_signal));
            // Nobody is listening any more once the deadline has fired.
            let _ = sender.send(captured);
        });
    if let Err(error) = spawned {
        tracing::warn!(%error, thread_name, "failed to start background operation");
        return Outcome::on_exception(Fault::from_error(error));
    }

    let outcome = match receiver.recv_timeout(timeout) {
        Ok(captured) => settle(captured),
        Err(RecvTimeoutError::Timeout) => timed_out(timeout),
        Err(RecvTimeoutError::Disconnected) => Outcome::on_exception(Fault::new(
            "background operation ended without reporting a result",
        )),
    };
    signal.cancel();
    outcome
}

/// Folds a finished operation into its outcome, unwrapping a fault to its
/// root cause.
pub(crate) fn settle<R>(captured: Try<Outcome<R>>) -> Outcome<R> {
    match captured {
        Try::Value(outcome) => outcome,
        Try::Fault(fault) => {
            let root = fault.root_cause();
            tracing::warn!(fault = %root, "background operation faulted");
            Outcome::on_exception(root)
        }
    }
}

pub(crate) fn timed_out<R>(timeout: Duration) -> Outcome<R> {
    tracing::debug!(?timeout, "deadline reached before the operation completed");
    Outcome::failure(TIMEOUT_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::OutcomeKind;

    #[test]
    fn test_settle_unwraps_root_cause() {
        let captured: Try<Outcome<i32>> = Try::Fault(Fault::new("root").wrap("wrapper"));
        let outcome = settle(captured);
        assert_eq!(outcome.kind(), OutcomeKind::Exception);
        assert_eq!(outcome.fault().map(Fault::message), Some("root"));
    }

    #[test]
    fn test_background_thread_is_named() {
        let outcome = race_on_thread("named-worker", Duration::from_secs(1), |_| {
            Outcome::success(thread::current().name().map(str::to_string))
        });
        assert_eq!(outcome.into_data().flatten().as_deref(), Some("named-worker"));
    }

    #[test]
    fn test_signal_raised_after_success() {
        let (sender, receiver) = mpsc::channel();
        let outcome = race_on_thread("signal-check", Duration::from_secs(1), move |signal| {
            sender.send(signal).ok();
            Outcome::ok()
        });
        assert!(outcome.is_success());
        let signal = receiver.recv().unwrap();
        assert!(signal.is_cancellation_requested());
    }
}
