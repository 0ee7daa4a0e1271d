//! Point-free chaining: [`compose!`] builds a function, [`pipe!`] applies one.

/// Builds a function that applies its arguments right to left.
///
/// `compose!(f, g, h)` is `|x| f(g(h(x)))`. A single function is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use outcomes::compose;
/// use outcomes::outcome::Outcome;
///
/// fn to_outcome(parsed: Result<u16, std::num::ParseIntError>) -> Outcome<u16> {
///     Outcome::from(parsed)
/// }
/// let trim = |text: String| text.trim().to_string();
/// let parse = |text: String| text.parse::<u16>();
///
/// let parse_port = compose!(to_outcome, parse, trim);
/// assert_eq!(parse_port(" 8080 ".to_string()).into_data(), Some(8080));
/// assert!(parse_port("http".to_string()).is_exception());
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}

/// Threads a value through functions left to right.
///
/// `pipe!(x, f, g)` is `g(f(x))`, so it reads in the order the data flows.
/// Each function is called once and may consume its captures.
///
/// # Examples
///
/// ```
/// use outcomes::pipe;
/// use outcomes::outcome::Outcome;
///
/// let report = pipe!(
///     vec![3, 1, 2],
///     |mut ids: Vec<u32>| { ids.sort_unstable(); ids },
///     Outcome::success,
///     |ids: Outcome<Vec<u32>>| ids.map(|ids| ids.len()),
/// );
/// assert_eq!(report.into_data(), Some(3));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(, $remaining:expr)* $(,)?) => {
        $crate::pipe!(($function)($value) $(, $remaining)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compose_applies_right_to_left() {
        let add_one = |n: i32| n + 1;
        let double = |n: i32| n * 2;
        assert_eq!(compose!(add_one, double)(5), 11);
        assert_eq!(compose!(double, add_one)(5), 12);
    }

    #[test]
    fn test_compose_single_function() {
        let negate = |n: i32| -n;
        assert_eq!(compose!(negate)(4), -4);
    }

    #[test]
    fn test_pipe_applies_left_to_right() {
        let add_one = |n: i32| n + 1;
        let double = |n: i32| n * 2;
        assert_eq!(pipe!(5, double, add_one), 11);
        assert_eq!(pipe!(5), 5);
    }

    #[test]
    fn test_pipe_accepts_consuming_closures() {
        let owned = String::from("suffix");
        let append = move |text: String| text + &owned;
        assert_eq!(pipe!(String::from("with-"), append), "with-suffix");
    }
}
