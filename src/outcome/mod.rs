//! Outcome algebra: capture faults once, then compose them as data.
//!
//! This module provides:
//!
//! - [`Unit`]: the payload of an outcome that carries no value
//! - [`Fault`]: a captured error or panic, carried as a value
//! - [`Try`] and [`try_catch`]: the boundary where panics and errors become data
//! - [`Outcome`]: tri-state success / failure / exception with a message
//! - [`ErrorType`]: the derived error classification reported to consumers
//! - [`fish`]: Kleisli composition of outcome-returning functions
//!
//! # Examples
//!
//! ```rust
//! use outcomes::outcome::{try_catch_result, ErrorType, Outcome};
//!
//! fn load(id: u32) -> Outcome<String> {
//!     try_catch_result(|| if id == 0 { Err(std::fmt::Error) } else { Ok(Some(format!("row {id}"))) }, |fault| fault)
//!         .to_data_outcome()
//! }
//!
//! let shouted = load(7).map(|row| row.to_uppercase());
//! assert_eq!(shouted.into_data(), Some("ROW 7".to_string()));
//!
//! let broken = load(0).map(|row| row.to_uppercase());
//! assert_eq!(broken.error_type(), ErrorType::ExceptionThrown);
//! ```

mod combinators;
mod error;
mod fault;
mod fish;
#[allow(clippy::module_inception)]
mod outcome;
mod try_catch;
mod unit;

pub use error::{ErrorType, OutcomeError, OutcomeKind};
pub use fault::Fault;
pub use fish::{OutcomeFuture, fish, fish_async};
pub use outcome::{FAILURE_MESSAGE, NO_DATA_MESSAGE, Outcome, SUCCESS_MESSAGE, exception_message};
#[cfg(feature = "async")]
pub use try_catch::{try_catch_async, try_catch_result_async};
pub use try_catch::{Try, attempt, try_catch, try_catch_result};
pub use unit::Unit;
