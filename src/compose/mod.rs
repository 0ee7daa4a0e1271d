//! Function composition utilities.
//!
//! Plain function plumbing that pairs with the outcome combinators:
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right application, `pipe!(x, f, g) == g(f(x))`
//! - [`partial!`]: fix arguments of a two- or three-argument function
//! - [`fish!`]: left-to-right composition of outcome-returning functions
//! - [`identity`], [`constant`], [`flip`]: the usual small combinators
//! - [`fork`] and `fork_async`: one input, two branches, one joined result
//! - [`validate`]: check a value against a list of predicates
//!
//! # Examples
//!
//! ```
//! use outcomes::{compose, fish, pipe};
//! use outcomes::outcome::Outcome;
//!
//! let normalize = compose!(|s: String| s.to_lowercase(), |s: String| s.trim().to_string());
//! assert_eq!(normalize("  MiXeD ".to_string()), "mixed");
//!
//! let non_empty = |s: String| if s.is_empty() { Outcome::failure("blank") } else { Outcome::success(s) };
//! let length = |s: String| Outcome::success(s.len());
//! let checked = fish!(non_empty, length);
//!
//! assert_eq!(pipe!(" Ok ".to_string(), normalize, checked).into_data(), Some(2));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe / compose**: `pipe!(x, f, g) == compose!(g, f)(x)`
//! - **Flip**: `flip(flip(f)) == f`

mod compose_macro;
mod fork;
mod partial_macro;
mod utils;
mod validate;

#[cfg(feature = "async")]
pub use fork::fork_async;
pub use fork::fork;
pub use utils::{constant, flip, identity};
pub use validate::validate;

pub use crate::compose;
pub use crate::fish;
pub use crate::partial;
pub use crate::pipe;
