//! CRUD operations that report outcomes.

use std::fmt::Debug;

use super::Repository;
use crate::outcome::{ErrorType, Outcome, Unit, try_catch_result};

/// Wraps a [`Repository`] so every call returns an [`Outcome`].
///
/// | Backend result | Outcome |
/// |----------------|---------|
/// | row found | success with the row |
/// | no row | failure with [`ErrorType::NoData`] |
/// | `Err` or panic | exception, fault message kept verbatim |
///
/// # Examples
///
/// ```rust
/// use outcomes::outcome::ErrorType;
/// use outcomes::provider::{CrudProvider, InMemoryRepository};
///
/// let accounts = CrudProvider::new(InMemoryRepository::new());
/// assert!(accounts.create(7_u32, "savings".to_string()).is_success());
///
/// assert_eq!(accounts.get(&7).into_data().as_deref(), Some("savings"));
/// assert_eq!(accounts.get(&8).error_type(), ErrorType::NoData);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CrudProvider<R> {
    repository: R,
}

impl<R> CrudProvider<R> {
    /// Wraps a backend.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the wrapped backend.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Consumes the provider, returning the backend.
    pub fn into_inner(self) -> R {
        self.repository
    }

    /// Loads one row.
    pub fn get<K, V>(&self, key: &K) -> Outcome<V>
    where
        R: Repository<K, V>,
        K: Debug,
    {
        let outcome = try_catch_result(|| self.repository.fetch(key), |fault| fault).to_data_outcome();
        report_missing(outcome, "get", key)
    }

    /// Loads every row. An empty backend is a success with an empty list.
    pub fn list<K, V>(&self) -> Outcome<Vec<V>>
    where
        R: Repository<K, V>,
    {
        try_catch_result(|| self.repository.fetch_all(), |fault| fault).to_outcome()
    }

    /// Stores a new row.
    pub fn create<K, V>(&self, key: K, value: V) -> Outcome<Unit>
    where
        R: Repository<K, V>,
    {
        try_catch_result(|| self.repository.insert(key, value), |fault| fault)
            .map(Unit::from)
            .to_outcome()
    }

    /// Replaces an existing row. Updating a missing row is a no-data failure.
    pub fn update<K, V>(&self, key: &K, value: V) -> Outcome<Unit>
    where
        R: Repository<K, V>,
        K: Debug,
    {
        let outcome = try_catch_result(|| self.repository.update(key, value), |fault| fault)
            .to_data_outcome()
            .discard();
        report_missing(outcome, "update", key)
    }

    /// Removes a row and returns it. Deleting a missing row is a no-data
    /// failure.
    pub fn delete<K, V>(&self, key: &K) -> Outcome<V>
    where
        R: Repository<K, V>,
        K: Debug,
    {
        let outcome = try_catch_result(|| self.repository.delete(key), |fault| fault).to_data_outcome();
        report_missing(outcome, "delete", key)
    }
}

fn report_missing<T>(outcome: Outcome<T>, operation: &'static str, key: &dyn Debug) -> Outcome<T> {
    if outcome.error_type() == ErrorType::NoData {
        tracing::debug!(operation, ?key, "no row for key");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Fault;
    use crate::provider::{InMemoryRepository, RepositoryError};

    struct Unreachable;

    impl Repository<u32, String> for Unreachable {
        fn fetch(&self, _: &u32) -> Result<Option<String>, RepositoryError> {
            Err(RepositoryError::Backend("connection refused".to_string()))
        }

        fn fetch_all(&self) -> Result<Vec<String>, RepositoryError> {
            panic!("pool exhausted")
        }

        fn insert(&self, _: u32, _: String) -> Result<(), RepositoryError> {
            Ok(())
        }

        fn update(&self, _: &u32, _: String) -> Result<Option<String>, RepositoryError> {
            Ok(None)
        }

        fn delete(&self, _: &u32) -> Result<Option<String>, RepositoryError> {
            Ok(None)
        }
    }

    #[test]
    fn test_backend_error_is_exception_with_verbatim_message() {
        let provider = CrudProvider::new(Unreachable);
        let outcome: Outcome<String> = provider.get(&1);
        assert_eq!(outcome.error_type(), ErrorType::ExceptionThrown);
        assert_eq!(outcome.fault().map(Fault::message), Some("connection refused"));
    }

    #[test]
    fn test_backend_panic_is_exception() {
        let provider = CrudProvider::new(Unreachable);
        let outcome: Outcome<Vec<String>> = provider.list();
        assert!(outcome.is_exception());
        assert_eq!(outcome.fault().map(Fault::message), Some("pool exhausted"));
    }

    #[test]
    fn test_update_and_delete_missing_row_are_no_data() {
        let provider = CrudProvider::new(InMemoryRepository::<u32, String>::new());
        assert_eq!(provider.update(&4, "x".to_string()).error_type(), ErrorType::NoData);
        let deleted: Outcome<String> = provider.delete(&4);
        assert_eq!(deleted.error_type(), ErrorType::NoData);
    }
}
