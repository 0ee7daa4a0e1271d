//! Small combinators that fill the gaps in a composed pipeline.

/// Returns its argument unchanged.
///
/// Useful as the neutral element of [`compose!`](crate::compose!) and as the
/// fault handler of [`try_catch`](crate::outcome::try_catch) when a fault
/// should be kept as is.
///
/// # Examples
///
/// ```
/// use outcomes::compose::identity;
/// use outcomes::outcome::try_catch;
///
/// let captured = try_catch(|| 40 + 2, identity);
/// assert_eq!(captured.value(), Some(&42));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use outcomes::compose::constant;
/// use outcomes::outcome::Outcome;
///
/// let fallback = constant(Outcome::success(0_u32));
/// let recovered = Outcome::<u32>::failure("cache miss").or_else(fallback);
/// assert_eq!(recovered.into_data(), Some(0));
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
