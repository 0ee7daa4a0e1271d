//! The `Unit` marker type.
//!
//! `Unit` is the payload of an outcome that carries no meaningful value and
//! only reports whether a side effect succeeded. `Outcome<Unit>` is the
//! "logical" outcome: success, failure or exception, with a message and no data.

use std::fmt;

/// Marker value for "no meaningful value, side-effect only".
///
/// Unlike `()`, `Unit` is a named type, which keeps signatures such as
/// `Outcome<Unit>` readable at call sites.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::{Outcome, Unit};
///
/// let logical: Outcome<Unit> = Outcome::ok();
/// assert!(logical.is_success());
/// assert_eq!(logical.into_data(), Some(Unit));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}
