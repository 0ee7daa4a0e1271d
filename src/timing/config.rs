//! Runtime configuration of the timeout runners.

use std::time::Duration;

/// Default deadline used by [`TimeoutConfig::default`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default name given to background threads started by blocking runners.
pub const DEFAULT_THREAD_NAME: &str = "outcomes-timeout";

/// Settings shared by the `run_*` family when driven through a
/// [`Timer`](super::Timer).
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use outcomes::timing::TimeoutConfig;
///
/// let config = TimeoutConfig::default()
///     .with_timeout(Duration::from_millis(700))
///     .with_thread_name("report-export");
/// assert_eq!(config.timeout, Duration::from_millis(700));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeoutConfig {
    /// How long an operation may run before the runner reports a timeout.
    pub timeout: Duration,
    /// Name of the background thread used by blocking runners.
    pub thread_name: String,
}

impl TimeoutConfig {
    /// Sets the deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the background thread name.
    #[must_use]
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = thread_name.into();
        self
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}
