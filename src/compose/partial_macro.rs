//! Partial application with `__` placeholders.

/// Fixes some arguments of a two- or three-argument function.
///
/// Write `__` for every argument that stays open; the result takes the open
/// arguments in their original order. Fixed arguments are evaluated once and
/// cloned on each call, so they must implement [`Clone`]. When every argument
/// is fixed the result is a thunk taking no arguments.
///
/// `__` is matched as a literal token and needs no import.
///
/// # Examples
///
/// ```
/// use outcomes::partial;
/// use outcomes::outcome::Outcome;
///
/// fn within(limit: u32, label: &str, value: u32) -> Outcome<u32> {
///     if value <= limit {
///         Outcome::success(value)
///     } else {
///         Outcome::failure(format!("{label} exceeds {limit}"))
///     }
/// }
///
/// let page_size = partial!(within, 100, "page size", __);
/// assert_eq!(page_size(25).into_data(), Some(25));
/// assert_eq!(page_size(500).message(), "page size exceeds 100");
/// ```
#[macro_export]
macro_rules! partial {
    // Three arguments. These arms come first: a two-argument call never has
    // enough tokens to match them.
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};

    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(first.clone(), second, third)
    }};

    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, second.clone(), third)
    }};

    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, third.clone())
    }};

    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let (first, second) = ($first, $second);
        move |third| function(first.clone(), second.clone(), third)
    }};

    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let (first, third) = ($first, $third);
        move |second| function(first.clone(), second, third.clone())
    }};

    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let (second, third) = ($second, $third);
        move |first| function(first, second.clone(), third.clone())
    }};

    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let (first, second, third) = ($first, $second, $third);
        move || function(first.clone(), second.clone(), third.clone())
    }};

    // Two arguments.
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};

    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(first.clone(), second)
    }};

    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, second.clone())
    }};

    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let (first, second) = ($first, $second);
        move || function(first.clone(), second.clone())
    }};
}
