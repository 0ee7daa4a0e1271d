//! Mapping outcomes onto view responses.
//!
//! A presentation layer only needs three answers: here is the body, there is
//! nothing to show, or something went wrong. [`ViewResponse`] encodes those
//! and knows the matching HTTP status code, without depending on any web
//! framework.

use crate::outcome::{Outcome, Unit};

/// A response built from an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "body", rename_all = "snake_case"))]
pub enum ViewResponse<T> {
    /// A success carrying data.
    Ok(T),
    /// A success without data.
    NoContent,
    /// A failure or exception, with the outcome's message.
    ServerError {
        /// Human-readable explanation taken from the outcome.
        message: String,
    },
}

impl<T> ViewResponse<T> {
    /// Builds a response from an outcome carrying data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    /// use outcomes::response::ViewResponse;
    ///
    /// let found = ViewResponse::from_outcome(Outcome::success("report"));
    /// assert_eq!(found, ViewResponse::Ok("report"));
    /// assert_eq!(found.status_code(), 200);
    ///
    /// let missing = ViewResponse::from_outcome(Outcome::<&str>::no_data());
    /// assert_eq!(missing.status_code(), 500);
    /// ```
    pub fn from_outcome(outcome: Outcome<T>) -> Self {
        match outcome.into_result() {
            Ok(data) => Self::Ok(data),
            Err(error) => Self::ServerError {
                message: error.message().to_string(),
            },
        }
    }

    /// Builds a response from an outcome whose data may legitimately be
    /// absent: `Some` is a body, `None` is no content.
    pub fn from_optional(outcome: Outcome<Option<T>>) -> Self {
        if outcome.is_success() {
            outcome.into_data().flatten().map_or(Self::NoContent, Self::Ok)
        } else {
            Self::ServerError {
                message: outcome.into_message(),
            }
        }
    }

    /// HTTP status code of this response.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Ok(_) => 200,
            Self::NoContent => 204,
            Self::ServerError { .. } => 500,
        }
    }

    /// Returns `true` unless this is a server error.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::ServerError { .. })
    }
}

impl ViewResponse<Unit> {
    /// Builds a response from a logical outcome: success is no content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    /// use outcomes::response::ViewResponse;
    ///
    /// assert_eq!(ViewResponse::from_logical(&Outcome::ok()).status_code(), 204);
    /// assert_eq!(
    ///     ViewResponse::from_logical(&Outcome::failure("locked")),
    ///     ViewResponse::ServerError { message: "locked".to_string() },
    /// );
    /// ```
    pub fn from_logical(outcome: &Outcome<Unit>) -> Self {
        if outcome.is_success() {
            Self::NoContent
        } else {
            Self::ServerError {
                message: outcome.message().to_string(),
            }
        }
    }
}

impl<T> From<Outcome<T>> for ViewResponse<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self::from_outcome(outcome)
    }
}
