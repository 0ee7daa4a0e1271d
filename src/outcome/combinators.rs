//! Monadic combinators for [`Outcome`].
//!
//! Every combinator consumes its receiver and returns a new outcome. None of
//! them panics or re-raises a captured fault: unsuccessful outcomes flow
//! through unchanged, re-typed to the new payload type where needed.
//!
//! # Laws
//!
//! `Outcome` satisfies the monad laws with [`Outcome::success`] as `pure`:
//!
//! 1. **Left Identity**: `Outcome::success(a).bind(f) == f(a)`
//! 2. **Right Identity**: `m.bind(Outcome::success) == m` (up to the success message)
//! 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`

use std::future::Future;

use super::{Fault, Outcome, Unit};

// =============================================================================
// Bind / Map
// =============================================================================

impl<T> Outcome<T> {
    /// Chains a computation that itself produces an outcome.
    ///
    /// On success the continuation receives the data and its outcome replaces
    /// this one. On failure or exception the continuation is not invoked and
    /// the kind, message and fault are carried into the new payload type.
    ///
    /// `Outcome<Unit>` binds into a data-carrying outcome the same way, since
    /// its payload is [`Unit`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// fn parse(text: &str) -> Outcome<i32> {
    ///     text.parse().map_or_else(|_| Outcome::failure("not a number"), Outcome::success)
    /// }
    ///
    /// let doubled = Outcome::success("21").bind(parse).map(|n| n * 2);
    /// assert_eq!(doubled.into_data(), Some(42));
    ///
    /// let failed = Outcome::success("x").bind(parse);
    /// assert_eq!(failed.message(), "not a number");
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.split() {
            Ok((data, _)) => function(data),
            Err(short_circuited) => short_circuited,
        }
    }

    /// Asynchronous [`bind`](Self::bind).
    pub async fn bind_async<U, F, Fut>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.split() {
            Ok((data, _)) => function(data).await,
            Err(short_circuited) => short_circuited,
        }
    }

    /// Transforms the data of a success, keeping its message.
    ///
    /// Failures and exceptions pass through with their state preserved.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.split() {
            Ok((data, message)) => Outcome::success(function(data)).with_message(message),
            Err(short_circuited) => short_circuited,
        }
    }

    /// Asynchronous [`map`](Self::map).
    pub async fn map_async<U, F, Fut>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.split() {
            Ok((data, message)) => Outcome::success(function(data).await).with_message(message),
            Err(short_circuited) => short_circuited,
        }
    }

    /// Replaces the payload of a success with [`Unit`], producing a logical
    /// outcome.
    pub fn discard(self) -> Outcome<Unit> {
        self.map(|_| Unit)
    }

    /// Runs `next` only if this outcome succeeded, discarding this payload.
    pub fn and<U>(self, next: Outcome<U>) -> Outcome<U> {
        self.bind(|_| next)
    }
}

// =============================================================================
// Match
// =============================================================================

impl<T> Outcome<T> {
    /// Dispatches on the outcome with a success and a failure branch.
    ///
    /// Exceptions are handled by the failure branch, which receives the
    /// outcome message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::{Fault, Outcome};
    ///
    /// let describe = |outcome: Outcome<i32>| {
    ///     outcome.match_outcome(|n| format!("got {n}"), |message| format!("failed: {message}"))
    /// };
    ///
    /// assert_eq!(describe(Outcome::success(1)), "got 1");
    /// assert_eq!(describe(Outcome::failure("bad input")), "failed: bad input");
    /// assert_eq!(
    ///     describe(Outcome::on_exception(Fault::new("boom"))),
    ///     "failed: Operation failed with exception: boom"
    /// );
    /// ```
    pub fn match_outcome<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(String) -> R,
    {
        match self.split::<T>() {
            Ok((data, _)) => on_success(data),
            Err(unsuccessful) => on_failure(unsuccessful.into_message()),
        }
    }

    /// Dispatches on all three outcome kinds.
    pub fn fold<R, S, F, E>(self, on_success: S, on_failure: F, on_exception: E) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(String) -> R,
        E: FnOnce(Fault, String) -> R,
    {
        match self.split::<T>() {
            Ok((data, _)) => on_success(data),
            Err(unsuccessful) => match unsuccessful.fault().cloned() {
                Some(fault) => on_exception(fault, unsuccessful.into_message()),
                None => on_failure(unsuccessful.into_message()),
            },
        }
    }
}

// =============================================================================
// Guards and recovery
// =============================================================================

impl<T> Outcome<T> {
    /// Turns a success into a failure with `message` unless `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let adult = Outcome::success(17).ensure(|age| *age >= 18, "must be an adult");
    /// assert_eq!(adult.message(), "must be an adult");
    /// ```
    #[must_use]
    pub fn ensure<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.data().is_some_and(|data| !predicate(data)) {
            Self::failure(message)
        } else {
            self
        }
    }

    /// Like [`ensure`](Self::ensure) with several predicates; fails unless
    /// all of them hold.
    #[must_use]
    pub fn ensure_all(self, predicates: &[&dyn Fn(&T) -> bool], message: impl Into<String>) -> Self {
        self.ensure(|data| predicates.iter().all(|predicate| predicate(data)), message)
    }

    /// Replaces an unsuccessful outcome with the result of `function`.
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if self.is_success() { self } else { function(self) }
    }

    /// Recovers from failure or exception by producing data from the message.
    #[must_use]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(&str) -> T,
    {
        if self.is_success() {
            self
        } else {
            let data = function(self.message());
            Self::success(data)
        }
    }

    /// Calls `function` with the data of a success, returning the outcome
    /// unchanged.
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(data) = self.data() {
            function(data);
        }
        self
    }

    /// Calls `function` with the message of an unsuccessful outcome.
    #[must_use]
    pub fn tap_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&str),
    {
        if !self.is_success() {
            function(self.message());
        }
        self
    }

    /// Rewrites the message, keeping everything else.
    #[must_use]
    pub fn map_message<F>(self, function: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        let message = function(self.message());
        self.with_message(message)
    }
}

// =============================================================================
// Collections
// =============================================================================

impl<T> Outcome<T> {
    /// Collects outcomes into a single outcome of all their data.
    ///
    /// Stops at the first unsuccessful outcome and returns it re-typed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::outcome::Outcome;
    ///
    /// let all = Outcome::combine(vec![Outcome::success(1), Outcome::success(2)]);
    /// assert_eq!(all.into_data(), Some(vec![1, 2]));
    ///
    /// let broken = Outcome::combine(vec![Outcome::success(1), Outcome::failure("second")]);
    /// assert_eq!(broken.message(), "second");
    /// ```
    pub fn combine<I>(outcomes: I) -> Outcome<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        outcomes.into_iter().collect()
    }
}

impl<T> FromIterator<Outcome<T>> for Outcome<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut collected = Vec::new();
        for outcome in iter {
            match outcome.split() {
                Ok((data, _)) => collected.push(data),
                Err(short_circuited) => return short_circuited,
            }
        }
        Self::success(collected)
    }
}
