//! A reusable runner bound to a [`TimeoutConfig`].

use std::future::Future;

use super::blocking::race_on_thread;
use super::task::{
    run_blocking_with_timeout_async, run_cancellable_outcome_with_timeout_async,
    run_cancellable_with_timeout_async, run_outcome_with_timeout_async, run_with_timeout_async,
};
use super::{CancellationSignal, TimeoutConfig};
use crate::outcome::Outcome;

/// Runs operations with a stored [`TimeoutConfig`].
///
/// Every method behaves like the free function of the same shape, with the
/// deadline (and, for blocking runs, the thread name) taken from the config.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use outcomes::timing::{TimeoutConfig, Timer};
///
/// let timer = Timer::new(TimeoutConfig::default().with_timeout(Duration::from_millis(500)));
/// let outcome = timer.run(|| "fast enough");
/// assert_eq!(outcome.into_data(), Some("fast enough"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timer {
    config: TimeoutConfig,
}

impl Timer {
    /// Creates a timer from a config.
    #[must_use]
    pub const fn new(config: TimeoutConfig) -> Self {
        Self { config }
    }

    /// Returns the config this timer runs with.
    #[must_use]
    pub const fn config(&self) -> &TimeoutConfig {
        &self.config
    }

    /// See [`run_with_timeout`](super::run_with_timeout).
    pub fn run<R, F>(&self, operation: F) -> Outcome<R>
    where
        R: Send + 'static,
        F: FnOnce() -> R + Send + 'static,
    {
        self.run_outcome(move || Outcome::success(operation()))
    }

    /// See [`run_cancellable_with_timeout`](super::run_cancellable_with_timeout).
    pub fn run_cancellable<R, F>(&self, operation: F) -> Outcome<R>
    where
        R: Send + 'static,
        F: FnOnce(CancellationSignal) -> R + Send + 'static,
    {
        race_on_thread(&self.config.thread_name, self.config.timeout, move |signal| {
            Outcome::success(operation(signal))
        })
    }

    /// See [`run_outcome_with_timeout`](super::run_outcome_with_timeout).
    pub fn run_outcome<R, F>(&self, operation: F) -> Outcome<R>
    where
        R: Send + 'static,
        F: FnOnce() -> Outcome<R> + Send + 'static,
    {
        race_on_thread(&self.config.thread_name, self.config.timeout, move |_| operation())
    }

    /// See [`run_cancellable_outcome_with_timeout`](super::run_cancellable_outcome_with_timeout).
    pub fn run_cancellable_outcome<R, F>(&self, operation: F) -> Outcome<R>
    where
        R: Send + 'static,
        F: FnOnce(CancellationSignal) -> Outcome<R> + Send + 'static,
    {
        race_on_thread(&self.config.thread_name, self.config.timeout, operation)
    }

    /// See [`run_with_timeout_async`](super::run_with_timeout_async).
    pub async fn run_async<R, F, Fut>(&self, operation: F) -> Outcome<R>
    where
        R: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        run_with_timeout_async(operation, self.config.timeout).await
    }

    /// See [`run_cancellable_with_timeout_async`](super::run_cancellable_with_timeout_async).
    pub async fn run_cancellable_async<R, F, Fut>(&self, operation: F) -> Outcome<R>
    where
        R: Send + 'static,
        F: FnOnce(CancellationSignal) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        run_cancellable_with_timeout_async(operation, self.config.timeout).await
    }

    /// See [`run_outcome_with_timeout_async`](super::run_outcome_with_timeout_async).
    pub async fn run_outcome_async<R, F, Fut>(&self, operation: F) -> Outcome<R>
    where
        R: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<R>> + Send + 'static,
    {
        run_outcome_with_timeout_async(operation, self.config.timeout).await
    }

    /// See [`run_cancellable_outcome_with_timeout_async`](super::run_cancellable_outcome_with_timeout_async).
    pub async fn run_cancellable_outcome_async<R, F, Fut>(&self, operation: F) -> Outcome<R>
    where
        R: Send + 'static,
        F: FnOnce(CancellationSignal) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<R>> + Send + 'static,
    {
        run_cancellable_outcome_with_timeout_async(operation, self.config.timeout).await
    }

    /// See [`run_blocking_with_timeout_async`](super::run_blocking_with_timeout_async).
    pub async fn run_blocking_async<R, F>(&self, operation: F) -> Outcome<R>
    where
        R: Send + 'static,
        F: FnOnce(CancellationSignal) -> R + Send + 'static,
    {
        run_blocking_with_timeout_async(operation, self.config.timeout).await
    }
}

impl From<TimeoutConfig> for Timer {
    fn from(config: TimeoutConfig) -> Self {
        Self::new(config)
    }
}
