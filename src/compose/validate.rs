//! Checking a value against a set of predicates.

/// Returns `true` iff every predicate holds for `value`.
///
/// Every predicate is total and side-effect free, so the answer does not
/// depend on their order. An empty list is vacuously satisfied.
///
/// # Examples
///
/// ```
/// use outcomes::compose::validate;
///
/// let non_empty = |name: &String| !name.is_empty();
/// let short = |name: &String| name.len() <= 16;
/// let ascii = |name: &String| name.is_ascii();
///
/// assert!(validate(&"ledger".to_string(), &[&non_empty, &short, &ascii]));
/// assert!(!validate(&"a-very-long-account-name".to_string(), &[&ascii, &short]));
/// ```
pub fn validate<T: ?Sized>(value: &T, predicates: &[&dyn Fn(&T) -> bool]) -> bool {
    predicates.iter().all(|predicate| predicate(value))
}
