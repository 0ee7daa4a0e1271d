//! # outcomes
//!
//! Functional outcome types for Rust: capture faults once, carry them as
//! data, and compose fallible steps without ever re-raising.
//!
//! ## Overview
//!
//! - **Capture**: [`try_catch`](outcome::try_catch) turns a panic or an `Err`
//!   into a [`Try`](outcome::Try)
//! - **Outcome**: [`Outcome`](outcome::Outcome) is success, failure or
//!   exception, always with a message, with `bind`, `map`, `fish` and `fold`
//! - **Timing**: `run_with_timeout` and friends race an operation against a
//!   deadline with cooperative cancellation
//! - **Composition**: `compose!`, `pipe!`, `partial!`, `fish!`, `fork`
//! - **Adapters**: a CRUD provider over any keyed backend and a view
//!   response mapping
//!
//! ## Feature Flags
//!
//! - `compose`: function composition utilities
//! - `async`: asynchronous combinators on tokio and futures
//! - `timing`: bounded-time execution (implies `async`)
//! - `provider`: repository adapter and in-memory backend
//! - `rayon`: run `fork` branches in parallel
//! - `serde`: serialization of error kinds, configs and responses
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! fn parse_quantity(text: &str) -> Outcome<u32> {
//!     try_catch_result(|| text.trim().parse::<u32>(), |fault| fault).to_outcome()
//! }
//!
//! let total = parse_quantity(" 12 ")
//!     .ensure(|quantity| *quantity > 0, "quantity must be positive")
//!     .map(|quantity| quantity * 3);
//! assert_eq!(total.into_data(), Some(36));
//!
//! let rejected = parse_quantity("twelve");
//! assert_eq!(rejected.error_type(), ErrorType::ExceptionThrown);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::outcome::*;

    pub use crate::response::ViewResponse;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "timing")]
    pub use crate::timing::*;

    #[cfg(feature = "provider")]
    pub use crate::provider::*;
}

pub mod outcome;

pub mod response;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "timing")]
pub mod timing;

#[cfg(feature = "provider")]
pub mod provider;
