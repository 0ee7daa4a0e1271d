//! The tri-state `Outcome<T>` type and its construction rules.

use std::fmt;

use super::{ErrorType, Fault, OutcomeError, OutcomeKind, Unit};

/// Default message of a successful outcome.
pub const SUCCESS_MESSAGE: &str = "Operation successful";

/// Default message of a failed outcome.
pub const FAILURE_MESSAGE: &str = "Operation failed";

/// Default message of an outcome that failed because no data was produced.
pub const NO_DATA_MESSAGE: &str = "No data";

/// Builds the default message of an exception outcome.
#[must_use]
pub fn exception_message(fault: &Fault) -> String {
    format!("Operation failed with exception: {}", fault.message())
}

#[derive(Clone, PartialEq, Eq)]
enum State<T> {
    Success(T),
    Failure(FailureCause),
    Exception(Fault),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureCause {
    Requested,
    NoData,
    MissingFault,
}

/// The outcome of an operation: success with data, failure, or exception.
///
/// An `Outcome` is immutable. Every combinator returns a new value, and the
/// constructors repair states that would otherwise lie about what happened:
///
/// 1. a success requested without data becomes a failure (`ErrorType::NoData`);
/// 2. an exception requested without a fault becomes a failure (`ErrorType::Unknown`).
///
/// Every outcome carries a non-empty message; when the caller supplies none,
/// the default for the outcome kind is used.
///
/// `Outcome<Unit>` is the logical outcome that reports only whether a side
/// effect succeeded.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::{ErrorType, Outcome};
///
/// let found = Outcome::on_success(Some(42));
/// assert!(found.is_success());
/// assert_eq!(found.data(), Some(&42));
/// assert_eq!(found.message(), "Operation successful");
///
/// let missing: Outcome<i32> = Outcome::on_success(None);
/// assert!(missing.is_failure());
/// assert_eq!(missing.error_type(), ErrorType::NoData);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    state: State<T>,
    message: String,
}

// =============================================================================
// Constructors
// =============================================================================

impl<T> Outcome<T> {
    /// Creates a successful outcome carrying `data`.
    #[inline]
    pub fn success(data: T) -> Self {
        Self {
            state: State::Success(data),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Creates a success if `data` is present, otherwise a no-data failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// assert!(Outcome::on_success(Some("row")).is_success());
    /// assert!(Outcome::<&str>::on_success(None).is_failure());
    /// ```
    pub fn on_success(data: Option<T>) -> Self {
        data.map_or_else(Self::no_data, Self::success)
    }

    /// Explicit conversion of an optional value: `Some` is a success, `None`
    /// a failure with the no-data message.
    #[inline]
    pub fn from_value(value: Option<T>) -> Self {
        Self::on_success(value)
    }

    /// Creates a failure with the default message.
    pub fn on_failure() -> Self {
        Self::failure(FAILURE_MESSAGE)
    }

    /// Creates a failure with the given message.
    ///
    /// An empty message is replaced by the default failure message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::with_cause(FailureCause::Requested, message.into())
    }

    /// Creates a failure reporting that no data was produced.
    pub fn no_data() -> Self {
        Self::with_cause(FailureCause::NoData, NO_DATA_MESSAGE.to_string())
    }

    /// Creates an exception outcome from a captured fault.
    ///
    /// The message defaults to `"Operation failed with exception: {fault}"`.
    pub fn on_exception(fault: impl Into<Fault>) -> Self {
        let fault = fault.into();
        Self {
            message: exception_message(&fault),
            state: State::Exception(fault),
        }
    }

    /// Creates an outcome from loosely specified parts, applying the
    /// self-correction rules in order.
    ///
    /// This is the single place where a requested kind is reconciled with the
    /// data and fault that are actually present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::{ErrorType, Outcome, OutcomeKind};
    ///
    /// let lying = Outcome::<i32>::derive(OutcomeKind::Success, None, None, None);
    /// assert_eq!(lying.error_type(), ErrorType::NoData);
    ///
    /// let dangling = Outcome::<i32>::derive(OutcomeKind::Exception, None, Some("boom".into()), None);
    /// assert_eq!(dangling.kind(), OutcomeKind::Failure);
    /// assert_eq!(dangling.message(), "boom");
    /// ```
    pub fn derive(
        kind: OutcomeKind,
        data: Option<T>,
        message: Option<String>,
        fault: Option<Fault>,
    ) -> Self {
        let outcome = match (kind, data, fault) {
            (OutcomeKind::Success, Some(data), _) => Self::success(data),
            (OutcomeKind::Success, None, _) => Self::no_data(),
            (OutcomeKind::Failure, _, _) => Self::on_failure(),
            (OutcomeKind::Exception, _, Some(fault)) => Self::on_exception(fault),
            (OutcomeKind::Exception, _, None) => {
                Self::with_cause(FailureCause::MissingFault, FAILURE_MESSAGE.to_string())
            }
        };
        match message {
            Some(message) => outcome.with_message(message),
            None => outcome,
        }
    }

    fn with_cause(cause: FailureCause, message: String) -> Self {
        let message = if message.is_empty() {
            FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            state: State::Failure(cause),
            message,
        }
    }

    /// Replaces the message, keeping the outcome kind, data and fault.
    ///
    /// An empty message leaves the current message in place.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.is_empty() {
            self.message = message;
        }
        self
    }
}

impl Outcome<Unit> {
    /// Creates a successful logical outcome.
    pub fn ok() -> Self {
        Self::success(Unit)
    }

    /// Explicit conversion of a boolean: `true` is a success, `false` a
    /// failure with the default message.
    pub fn from_bool(value: bool) -> Self {
        if value { Self::ok() } else { Self::on_failure() }
    }
}

// =============================================================================
// Inspection
// =============================================================================

impl<T> Outcome<T> {
    /// Returns how the operation concluded.
    #[inline]
    pub const fn kind(&self) -> OutcomeKind {
        match self.state {
            State::Success(_) => OutcomeKind::Success,
            State::Failure(_) => OutcomeKind::Failure,
            State::Exception(_) => OutcomeKind::Exception,
        }
    }

    /// Returns the derived error classification.
    pub const fn error_type(&self) -> ErrorType {
        match self.state {
            State::Success(_) => ErrorType::None,
            State::Failure(FailureCause::Requested) => ErrorType::Failure,
            State::Failure(FailureCause::NoData) => ErrorType::NoData,
            State::Failure(FailureCause::MissingFault) => ErrorType::Unknown,
            State::Exception(_) => ErrorType::ExceptionThrown,
        }
    }

    /// Returns `true` if the outcome is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` if the outcome is a failure (not an exception).
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// Returns `true` if the outcome carries a captured fault.
    #[inline]
    pub const fn is_exception(&self) -> bool {
        matches!(self.state, State::Exception(_))
    }

    /// Returns `true` if the outcome carries data.
    ///
    /// Presence is explicit: `Outcome::success(0)` has data.
    #[inline]
    pub const fn has_data(&self) -> bool {
        self.is_success()
    }

    /// Returns the outcome message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the outcome and returns its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Returns a reference to the data, if any.
    pub const fn data(&self) -> Option<&T> {
        match &self.state {
            State::Success(data) => Some(data),
            State::Failure(_) | State::Exception(_) => None,
        }
    }

    /// Consumes the outcome and returns the data, if any.
    pub fn into_data(self) -> Option<T> {
        match self.state {
            State::Success(data) => Some(data),
            State::Failure(_) | State::Exception(_) => None,
        }
    }

    /// Returns the captured fault, if any.
    pub const fn fault(&self) -> Option<&Fault> {
        match &self.state {
            State::Exception(fault) => Some(fault),
            State::Success(_) | State::Failure(_) => None,
        }
    }

    /// Borrows the data of the outcome without consuming it.
    pub fn as_ref(&self) -> Outcome<&T> {
        Outcome {
            state: match &self.state {
                State::Success(data) => State::Success(data),
                State::Failure(cause) => State::Failure(*cause),
                State::Exception(fault) => State::Exception(fault.clone()),
            },
            message: self.message.clone(),
        }
    }

    /// Splits a success into its data and message, or re-types an
    /// unsuccessful outcome with its message and fault preserved.
    pub(crate) fn split<U>(self) -> Result<(T, String), Outcome<U>> {
        match self.state {
            State::Success(data) => Ok((data, self.message)),
            State::Failure(cause) => Err(Outcome {
                state: State::Failure(cause),
                message: self.message,
            }),
            State::Exception(fault) => Err(Outcome {
                state: State::Exception(fault),
                message: self.message,
            }),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> Outcome<T> {
    /// Converts into a `std::result::Result`.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::Failure`] for a failure and
    /// [`OutcomeError::Exception`] for an exception.
    pub fn into_result(self) -> Result<T, OutcomeError> {
        let error_type = self.error_type();
        match self.state {
            State::Success(data) => Ok(data),
            State::Failure(_) => Err(OutcomeError::Failure {
                message: self.message,
                error_type,
            }),
            State::Exception(fault) => Err(OutcomeError::Exception {
                message: self.message,
                fault,
            }),
        }
    }
}

impl From<bool> for Outcome<Unit> {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl<T> From<Outcome<T>> for bool {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.is_success()
    }
}

impl<T> From<&Outcome<T>> for bool {
    fn from(outcome: &Outcome<T>) -> Self {
        outcome.is_success()
    }
}

/// `Ok` becomes a success, `Err` an exception carrying the error as a fault.
impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::on_exception(Fault::from_error(error)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Outcome");
        debug.field("kind", &self.kind());
        match &self.state {
            State::Success(data) => debug.field("data", data),
            State::Failure(_) => debug.field("error_type", &self.error_type()),
            State::Exception(fault) => debug.field("fault", fault),
        };
        debug.field("message", &self.message).finish()
    }
}

impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}: {}", self.kind(), self.message)
    }
}
