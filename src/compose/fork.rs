//! Fan one input out to two branches and join their results.

#[cfg(feature = "async")]
use std::future::Future;

/// Runs `left` and `right` on the same input and combines their results.
///
/// With the `rayon` feature the branches run in parallel through
/// [`rayon::join`]; without it they run one after the other. The bounds are
/// identical in both builds.
///
/// # Examples
///
/// ```
/// use outcomes::compose::fork;
///
/// let readings = vec![3.0, 9.0, 6.0];
/// let (low, high) = fork(
///     readings,
///     |values: &Vec<f64>| values.iter().copied().fold(f64::INFINITY, f64::min),
///     |values: &Vec<f64>| values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
///     |low, high| (low, high),
/// );
/// assert_eq!((low, high), (3.0, 9.0));
/// ```
pub fn fork<T, A, B, O, L, R, J>(input: T, left: L, right: R, join: J) -> O
where
    T: Sync,
    A: Send,
    B: Send,
    L: FnOnce(&T) -> A + Send,
    R: FnOnce(&T) -> B + Send,
    J: FnOnce(A, B) -> O,
{
    #[cfg(feature = "rayon")]
    let (left_result, right_result) = rayon::join(|| left(&input), || right(&input));

    #[cfg(not(feature = "rayon"))]
    let (left_result, right_result) = (left(&input), right(&input));

    join(left_result, right_result)
}

/// Awaits two asynchronous branches concurrently and combines their results.
///
/// Both branches receive a clone of `input` and are polled together with
/// [`tokio::join!`] on the current task.
///
/// # Examples
///
/// ```
/// use outcomes::compose::fork_async;
/// use outcomes::outcome::Outcome;
///
/// # #[tokio::main]
/// # async fn main() {
/// let profile = fork_async(
///     7_u32,
///     |id| async move { Outcome::success(format!("user-{id}")) },
///     |id| async move { Outcome::success(id * 10) },
///     |name, score| name.bind(|name| score.map(|score| (name, score))),
/// )
/// .await;
/// assert_eq!(profile.into_data(), Some(("user-7".to_string(), 70)));
/// # }
/// ```
#[cfg(feature = "async")]
pub async fn fork_async<T, FutA, FutB, O, L, R, J>(input: T, left: L, right: R, join: J) -> O
where
    T: Clone,
    FutA: Future,
    FutB: Future,
    L: FnOnce(T) -> FutA,
    R: FnOnce(T) -> FutB,
    J: FnOnce(FutA::Output, FutB::Output) -> O,
{
    let (left_result, right_result) = tokio::join!(left(input.clone()), right(input));
    join(left_result, right_result)
}
