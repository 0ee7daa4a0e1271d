//! Outcome classification and `std::result::Result` interop errors.

use thiserror::Error;

use super::Fault;

/// The three ways an operation can conclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeKind {
    /// The operation completed and, for data-carrying outcomes, produced data.
    Success,
    /// The operation completed without producing a usable result.
    Failure,
    /// The operation was aborted by a captured fault.
    Exception,
}

/// Fine-grained error classification of an outcome.
///
/// This is the vocabulary consumers such as data providers and view adapters
/// report; it is always derived from an [`Outcome`](super::Outcome), never
/// stored next to it.
///
/// | Outcome | `ErrorType` |
/// |---|---|
/// | success | `None` |
/// | failure requested by the caller | `Failure` |
/// | failure because data was absent | `NoData` |
/// | exception | `ExceptionThrown` |
/// | exception requested without a fault | `Unknown` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorType {
    /// No error.
    None,
    /// A logical failure.
    Failure,
    /// The operation succeeded but produced no data.
    NoData,
    /// A fault was captured.
    ExceptionThrown,
    /// A failure whose cause could not be determined.
    Unknown,
}

impl ErrorType {
    /// Returns the outcome kind this error type belongs to.
    #[must_use]
    pub const fn kind(self) -> OutcomeKind {
        match self {
            Self::None => OutcomeKind::Success,
            Self::Failure | Self::NoData | Self::Unknown => OutcomeKind::Failure,
            Self::ExceptionThrown => OutcomeKind::Exception,
        }
    }
}

/// Error produced when an unsuccessful outcome is converted into a
/// `std::result::Result`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The outcome was a failure.
    #[error("{message}")]
    Failure {
        /// The failure message.
        message: String,
        /// The derived classification (`Failure`, `NoData` or `Unknown`).
        error_type: ErrorType,
    },
    /// The outcome was an exception.
    #[error("{message}")]
    Exception {
        /// The outcome message.
        message: String,
        /// The captured fault.
        #[source]
        fault: Fault,
    },
}

impl OutcomeError {
    /// Returns the message of the originating outcome.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Failure { message, .. } | Self::Exception { message, .. } => message,
        }
    }

    /// Returns the derived error type of the originating outcome.
    #[must_use]
    pub const fn error_type(&self) -> ErrorType {
        match self {
            Self::Failure { error_type, .. } => *error_type,
            Self::Exception { .. } => ErrorType::ExceptionThrown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_type_kind() {
        assert_eq!(ErrorType::None.kind(), OutcomeKind::Success);
        assert_eq!(ErrorType::NoData.kind(), OutcomeKind::Failure);
        assert_eq!(ErrorType::Unknown.kind(), OutcomeKind::Failure);
        assert_eq!(ErrorType::ExceptionThrown.kind(), OutcomeKind::Exception);
    }

    #[test]
    fn test_outcome_error_exposes_fault_as_source() {
        let error = OutcomeError::Exception {
            message: "wrapped".to_string(),
            fault: Fault::new("root"),
        };
        assert_eq!(error.to_string(), "wrapped");
        assert_eq!(error.source().map(ToString::to_string).as_deref(), Some("root"));
        assert_eq!(error.error_type(), ErrorType::ExceptionThrown);
    }
}
