//! The storage backend contract.

use thiserror::Error;

/// Errors a storage backend reports through [`Repository`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A row with the key already exists.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    /// The backend itself failed (connection lost, constraint violated, ...).
    #[error("{0}")]
    Backend(String),
}

/// A keyed storage backend.
///
/// Implementations report a missing row as `Ok(None)` and reserve `Err` for
/// genuine backend failures; [`CrudProvider`](super::CrudProvider) relies on
/// that split to tell no-data apart from an exception.
pub trait Repository<K, V>: Send + Sync {
    /// Looks up one row.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backend fails.
    fn fetch(&self, key: &K) -> Result<Option<V>, RepositoryError>;

    /// Returns every row, in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backend fails.
    fn fetch_all(&self) -> Result<Vec<V>, RepositoryError>;

    /// Stores a new row.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateKey`] if the key is taken.
    fn insert(&self, key: K, value: V) -> Result<(), RepositoryError>;

    /// Replaces an existing row, returning the previous value or `None` if
    /// there was no row to replace.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backend fails.
    fn update(&self, key: &K, value: V) -> Result<Option<V>, RepositoryError>;

    /// Removes a row, returning it or `None` if there was none.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backend fails.
    fn delete(&self, key: &K) -> Result<Option<V>, RepositoryError>;
}
