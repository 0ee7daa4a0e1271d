//! Runners that await an operation on the tokio runtime with a deadline.
//!
//! The operation is spawned as its own task and raced against a
//! [`tokio::time::sleep_until`] deadline. A task that joins after the
//! deadline has passed still counts as timed out. When the deadline wins, the
//! task handle is dropped, which detaches the task: it is not aborted, and
//! cancellation-aware operations observe their [`CancellationSignal`] instead.
//!
//! Every runner here must be awaited from inside a tokio runtime with its
//! time driver enabled. Outside one, or on a runtime without timers, it
//! resolves to an exception outcome rather than panicking.

use std::future::Future;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::Instant;

use super::CancellationSignal;
use super::blocking::{settle, timed_out};
use crate::outcome::{Fault, Outcome, Try, try_catch_async};

/// Message of the fault reported when a runner is used outside a tokio runtime.
pub const NO_RUNTIME_MESSAGE: &str = "no tokio runtime is running on this thread";

/// Awaits an asynchronous operation with a deadline.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use outcomes::timing::run_with_timeout_async;
///
/// # #[tokio::main]
/// # async fn main() {
/// let quick = run_with_timeout_async(|| async { "done" }, Duration::from_secs(1)).await;
/// assert_eq!(quick.into_data(), Some("done"));
///
/// let slow = run_with_timeout_async(
///     || tokio::time::sleep(Duration::from_millis(300)),
///     Duration::from_millis(20),
/// )
/// .await;
/// assert_eq!(slow.message(), "Timeout reached");
/// # }
/// ```
pub async fn run_with_timeout_async<R, F, Fut>(operation: F, timeout: Duration) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = R> + Send + 'static,
{
    race_task(timeout, CancellationSignal::new(), async move {
        Outcome::success(operation().await)
    })
    .await
}

/// Awaits a cancellation-aware asynchronous operation with a deadline.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use outcomes::timing::run_cancellable_with_timeout_async;
///
/// # #[tokio::main]
/// # async fn main() {
/// let outcome = run_cancellable_with_timeout_async(
///     |signal| async move {
///         signal.cancelled().await;
///         "stopped"
///     },
///     Duration::from_millis(20),
/// )
/// .await;
/// assert!(outcome.is_failure());
/// # }
/// ```
pub async fn run_cancellable_with_timeout_async<R, F, Fut>(
    operation: F,
    timeout: Duration,
) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce(CancellationSignal) -> Fut + Send + 'static,
    Fut: Future<Output = R> + Send + 'static,
{
    let signal = CancellationSignal::new();
    let worker_signal = signal.clone();
    race_task(timeout, signal, async move {
        Outcome::success(operation(worker_signal).await)
    })
    .await
}

/// Awaits an asynchronous operation that already reports an outcome.
pub async fn run_outcome_with_timeout_async<R, F, Fut>(operation: F, timeout: Duration) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Outcome<R>> + Send + 'static,
{
    race_task(timeout, CancellationSignal::new(), async move { operation().await }).await
}

/// Cancellation-aware variant of [`run_outcome_with_timeout_async`].
pub async fn run_cancellable_outcome_with_timeout_async<R, F, Fut>(
    operation: F,
    timeout: Duration,
) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce(CancellationSignal) -> Fut + Send + 'static,
    Fut: Future<Output = Outcome<R>> + Send + 'static,
{
    let signal = CancellationSignal::new();
    let worker_signal = signal.clone();
    race_task(timeout, signal, async move { operation(worker_signal).await }).await
}

/// Awaits a blocking operation moved onto tokio's blocking pool.
///
/// Use this instead of [`run_with_timeout`](super::run_with_timeout) from
/// async code so the calling task is not parked on a channel.
pub async fn run_blocking_with_timeout_async<R, F>(operation: F, timeout: Duration) -> Outcome<R>
where
    R: Send + 'static,
    F: FnOnce(CancellationSignal) -> R + Send + 'static,
{
    let Ok(runtime) = Handle::try_current() else {
        return outside_runtime();
    };
    let signal = CancellationSignal::new();
    let worker_signal = signal.clone();
    let handle = runtime.spawn_blocking(move || Outcome::success(operation(worker_signal)));
    await_handle(timeout, signal, handle).await
}

async fn race_task<R, Fut>(timeout: Duration, signal: CancellationSignal, future: Fut) -> Outcome<R>
where
    R: Send + 'static,
    Fut: Future<Output = Outcome<R>> + Send + 'static,
{
    let Ok(runtime) = Handle::try_current() else {
        return outside_runtime();
    };
    let handle = runtime.spawn(future);
    await_handle(timeout, signal, handle).await
}

async fn await_handle<R>(
    timeout: Duration,
    signal: CancellationSignal,
    handle: JoinHandle<Outcome<R>>,
) -> Outcome<R> {
    let raced = try_catch_async(race_deadline(timeout, handle), |fault| fault).await;
    signal.cancel();
    match raced {
        Try::Value(outcome) => outcome,
        Try::Fault(fault) => {
            tracing::warn!(error = %fault, "timeout runner could not arm its deadline");
            Outcome::on_exception(fault)
        }
    }
}

// The deadline is polled first and checked again once the task has joined:
// on a current-thread runtime a task that holds the thread past the deadline
// must still lose the race.
async fn race_deadline<R>(timeout: Duration, mut handle: JoinHandle<Outcome<R>>) -> Outcome<R> {
    let Some(deadline) = Instant::now().checked_add(timeout) else {
        return joined(handle.await);
    };
    tokio::select! {
        biased;
        () = tokio::time::sleep_until(deadline) => timed_out(timeout),
        result = &mut handle => {
            if Instant::now() >= deadline {
                timed_out(timeout)
            } else {
                joined(result)
            }
        }
    }
}

fn joined<R>(result: Result<Outcome<R>, JoinError>) -> Outcome<R> {
    match result {
        Ok(outcome) => outcome,
        Err(error) => settle(Try::Fault(fault_from_join_error(error))),
    }
}

fn fault_from_join_error(error: JoinError) -> Fault {
    if error.is_panic() {
        Fault::from_panic(error.into_panic())
    } else {
        Fault::from_error(error)
    }
}

fn outside_runtime<R>() -> Outcome<R> {
    tracing::warn!("timeout runner awaited outside a tokio runtime");
    Outcome::on_exception(Fault::new(NO_RUNTIME_MESSAGE))
}
