//! Kleisli composition of outcome-returning functions.
//!
//! Given `first: A -> Outcome<B>` and `second: B -> Outcome<C>`, [`fish`]
//! builds `A -> Outcome<C>`: `second` only runs if `first` succeeded,
//! otherwise the failure of `first` is carried over, re-typed to `C`.
//!
//! # Laws
//!
//! With `Outcome::success` as the identity arrow:
//!
//! - **Left Identity**: `fish(Outcome::success, f) == f`
//! - **Right Identity**: `fish(f, Outcome::success) == f`
//! - **Associativity**: `fish(fish(f, g), h) == fish(f, fish(g, h))`

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::Outcome;

/// A boxed, sendable future resolving to an outcome.
pub type OutcomeFuture<T> = Pin<Box<dyn Future<Output = Outcome<T>> + Send>>;

/// Composes two outcome-returning functions left to right.
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::{fish, Outcome};
///
/// let parse = |text: &str| text.parse::<i32>().map_or_else(|_| Outcome::failure("not a number"), Outcome::success);
/// let reciprocal = |n: i32| if n == 0 { Outcome::failure("zero") } else { Outcome::success(1.0 / f64::from(n)) };
///
/// let parse_reciprocal = fish(parse, reciprocal);
/// assert_eq!(parse_reciprocal("4").into_data(), Some(0.25));
/// assert_eq!(parse_reciprocal("0").message(), "zero");
/// assert_eq!(parse_reciprocal("four").message(), "not a number");
/// ```
pub fn fish<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Outcome<C>
where
    F: Fn(A) -> Outcome<B>,
    G: Fn(B) -> Outcome<C>,
{
    move |input| first(input).bind(&second)
}

/// Composes two asynchronous outcome-returning functions left to right.
///
/// Behaves exactly like [`fish`], awaiting each step.
pub fn fish_async<A, B, C, F, G, FutB, FutC>(first: F, second: G) -> impl Fn(A) -> OutcomeFuture<C>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    F: Fn(A) -> FutB + Send + Sync + 'static,
    G: Fn(B) -> FutC + Send + Sync + 'static,
    FutB: Future<Output = Outcome<B>> + Send + 'static,
    FutC: Future<Output = Outcome<C>> + Send + 'static,
{
    let first = Arc::new(first);
    let second = Arc::new(second);
    move |input: A| -> OutcomeFuture<C> {
        let first = Arc::clone(&first);
        let second = Arc::clone(&second);
        Box::pin(async move {
            let intermediate = first(input).await;
            intermediate.bind_async(|value| second(value)).await
        })
    }
}

/// Composes any number of outcome-returning functions left to right.
///
/// `fish!(f, g, h)` is `fish(f, fish(g, h))`.
///
/// # Examples
///
/// ```rust
/// use outcomes::fish;
/// use outcomes::outcome::Outcome;
///
/// let non_empty = |text: String| if text.is_empty() { Outcome::failure("empty") } else { Outcome::success(text) };
/// let length = |text: String| Outcome::success(text.len());
/// let even = |n: usize| if n % 2 == 0 { Outcome::success(n) } else { Outcome::failure("odd") };
///
/// let pipeline = fish!(non_empty, length, even);
/// assert_eq!(pipeline("abcd".to_string()).into_data(), Some(4));
/// assert_eq!(pipeline("abc".to_string()).message(), "odd");
/// assert_eq!(pipeline(String::new()).message(), "empty");
/// ```
#[macro_export]
macro_rules! fish {
    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($remaining:expr),+ $(,)?) => {
        $crate::outcome::fish($first, $crate::fish!($($remaining),+))
    };
}
