//! The `Try` capture type and the `try_catch` boundary.
//!
//! `try_catch` is where faults stop being control flow and become data: it
//! runs an operation, captures a panic (or an `Err`, for
//! [`try_catch_result`]) as a [`Fault`], and never lets it escape. Everything
//! downstream works with [`Try`] and [`Outcome`] values.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::outcome::{try_catch, Try};
//!
//! let captured = try_catch(|| -> i32 { panic!("division by zero") }, |fault| fault.wrap("calculating ratio"));
//! assert!(captured.is_exception());
//! assert_eq!(captured.fault().map(|fault| fault.message()), Some("calculating ratio"));
//!
//! let produced = try_catch(|| 6 * 7, |fault| fault);
//! assert_eq!(produced, Try::Value(42));
//! ```

use std::error::Error;
#[cfg(feature = "async")]
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::{Fault, Outcome};

/// The result of a fallible computation: a value or a captured fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Try<T> {
    /// The computation returned normally.
    Value(T),
    /// The computation faulted.
    Fault(Fault),
}

impl<T> Try<T> {
    /// Returns `true` if a fault was captured.
    #[inline]
    pub const fn is_exception(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Returns `true` if a value was produced.
    #[inline]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns a reference to the value, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Fault(_) => None,
        }
    }

    /// Returns a reference to the captured fault, if any.
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Value(_) => None,
            Self::Fault(fault) => Some(fault),
        }
    }

    /// Transforms the value, leaving a fault untouched.
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Try::Value(function(value)),
            Self::Fault(fault) => Try::Fault(fault),
        }
    }

    /// Chains another fallible step.
    pub fn and_then<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Value(value) => function(value),
            Self::Fault(fault) => Try::Fault(fault),
        }
    }

    /// Replaces a fault with a value computed from it.
    pub fn recover<F>(self, function: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Value(value) => value,
            Self::Fault(fault) => function(fault),
        }
    }

    /// Converts into a `std::result::Result`.
    ///
    /// # Errors
    ///
    /// Returns the captured fault.
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Fault(fault) => Err(fault),
        }
    }

    /// Converts into an outcome: a value becomes a success with exactly that
    /// value, a fault becomes an exception carrying the fault's message.
    pub fn to_outcome(self) -> Outcome<T> {
        match self {
            Self::Value(value) => Outcome::success(value),
            Self::Fault(fault) => Outcome::on_exception(fault),
        }
    }
}

impl<T> Try<Option<T>> {
    /// Converts a lookup into an outcome, reporting `None` as a no-data
    /// failure rather than a generic one.
    pub fn to_data_outcome(self) -> Outcome<T> {
        match self {
            Self::Value(value) => Outcome::on_success(value),
            Self::Fault(fault) => Outcome::on_exception(fault),
        }
    }
}

impl<T> From<Try<T>> for Outcome<T> {
    fn from(captured: Try<T>) -> Self {
        captured.to_outcome()
    }
}

impl<T> From<Result<T, Fault>> for Try<T> {
    fn from(result: Result<T, Fault>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(fault) => Self::Fault(fault),
        }
    }
}

// =============================================================================
// Capture
// =============================================================================

/// Runs `operation`, capturing a panic as a fault.
///
/// `on_fault` may transform or wrap the captured fault. If `on_fault`
/// itself panics, the untransformed fault is kept. This function never
/// panics.
pub fn try_catch<T, F, H>(operation: F, on_fault: H) -> Try<T>
where
    F: FnOnce() -> T,
    H: FnOnce(Fault) -> Fault,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(value) => Try::Value(value),
        Err(payload) => Try::Fault(transform_fault(Fault::from_panic(payload), on_fault)),
    }
}

/// Runs a fallible `operation`, capturing both an `Err` and a panic as a
/// fault.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::try_catch_result;
///
/// let parsed = try_catch_result(|| "12".parse::<u8>(), |fault| fault);
/// assert_eq!(parsed.value(), Some(&12));
///
/// let overflow = try_catch_result(|| "300".parse::<u8>(), |fault| fault);
/// assert!(overflow.is_exception());
/// ```
pub fn try_catch_result<T, E, F, H>(operation: F, on_fault: H) -> Try<T>
where
    E: Error + Send + Sync + 'static,
    F: FnOnce() -> Result<T, E>,
    H: FnOnce(Fault) -> Fault,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(Ok(value)) => Try::Value(value),
        Ok(Err(error)) => Try::Fault(transform_fault(Fault::from_error(error), on_fault)),
        Err(payload) => Try::Fault(transform_fault(Fault::from_panic(payload), on_fault)),
    }
}

/// [`try_catch`] without a fault transformation.
#[inline]
pub fn attempt<T, F>(operation: F) -> Try<T>
where
    F: FnOnce() -> T,
{
    try_catch(operation, |fault| fault)
}

/// Awaits `future`, capturing a panic raised while polling it as a fault.
#[cfg(feature = "async")]
pub async fn try_catch_async<T, Fut, H>(future: Fut, on_fault: H) -> Try<T>
where
    Fut: Future<Output = T>,
    H: FnOnce(Fault) -> Fault,
{
    use futures::FutureExt;

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Try::Value(value),
        Err(payload) => Try::Fault(transform_fault(Fault::from_panic(payload), on_fault)),
    }
}

/// Awaits a fallible `future`, capturing both an `Err` and a panic.
#[cfg(feature = "async")]
pub async fn try_catch_result_async<T, E, Fut, H>(future: Fut, on_fault: H) -> Try<T>
where
    E: Error + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>>,
    H: FnOnce(Fault) -> Fault,
{
    use futures::FutureExt;

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(value)) => Try::Value(value),
        Ok(Err(error)) => Try::Fault(transform_fault(Fault::from_error(error), on_fault)),
        Err(payload) => Try::Fault(transform_fault(Fault::from_panic(payload), on_fault)),
    }
}

fn transform_fault<H>(fault: Fault, on_fault: H) -> Fault
where
    H: FnOnce(Fault) -> Fault,
{
    tracing::trace!(fault = %fault, type_name = fault.type_name(), "fault captured");
    let original = fault.clone();
    catch_unwind(AssertUnwindSafe(|| on_fault(fault))).unwrap_or_else(|_| {
        tracing::warn!(fault = %original, "fault handler panicked; keeping the original fault");
        original
    })
}
