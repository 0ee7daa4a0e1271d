//! Bounded-time execution with cooperative cancellation.
//!
//! Every runner races an operation against a deadline and folds the race into
//! an [`Outcome`](crate::outcome::Outcome):
//!
//! | Race result | Outcome |
//! |-------------|---------|
//! | operation returned `value` | success carrying `value` |
//! | operation returned an outcome | that outcome, unchanged |
//! | operation panicked before the deadline | exception carrying the root fault |
//! | deadline fired first | failure with the message `"Timeout reached"` |
//!
//! A fault raised after the deadline is never observed. Cancellation is
//! cooperative: the runner raises a [`CancellationSignal`] and the operation
//! decides when to stop.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use outcomes::timing::run_cancellable_with_timeout;
//!
//! let outcome = run_cancellable_with_timeout(
//!     |signal| {
//!         let mut processed = 0_u32;
//!         while signal.check().is_ok() {
//!             processed += 1;
//!             std::thread::sleep(Duration::from_millis(5));
//!         }
//!         processed
//!     },
//!     Duration::from_millis(50),
//! );
//! assert_eq!(outcome.message(), "Timeout reached");
//! ```

mod blocking;
mod cancellation;
mod config;
mod task;
mod timer;

pub use blocking::{
    run_cancellable_outcome_with_timeout, run_cancellable_with_timeout,
    run_outcome_with_timeout, run_with_timeout,
};
pub use cancellation::{CancellationSignal, Cancelled};
pub use config::{DEFAULT_THREAD_NAME, DEFAULT_TIMEOUT, TimeoutConfig};
pub use task::{
    NO_RUNTIME_MESSAGE, run_blocking_with_timeout_async,
    run_cancellable_outcome_with_timeout_async, run_cancellable_with_timeout_async,
    run_outcome_with_timeout_async, run_with_timeout_async,
};
pub use timer::Timer;

/// Message of the failure reported when the deadline fires first.
pub const TIMEOUT_MESSAGE: &str = "Timeout reached";
