//! A `HashMap`-backed repository.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use parking_lot::RwLock;

use super::{Repository, RepositoryError};

/// A [`Repository`] backed by a `HashMap` behind a read-write lock.
///
/// `fetch_all` returns rows sorted by key so results are stable.
#[derive(Debug)]
pub struct InMemoryRepository<K, V> {
    rows: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryRepository<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Returns `true` if no rows are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

impl<K, V> Default for InMemoryRepository<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryRepository<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(rows: I) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().collect()),
        }
    }
}

impl<K, V> Repository<K, V> for InMemoryRepository<K, V>
where
    K: Eq + Hash + Ord + Debug + Send + Sync,
    V: Clone + Send + Sync,
{
    fn fetch(&self, key: &K) -> Result<Option<V>, RepositoryError> {
        Ok(self.rows.read().get(key).cloned())
    }

    fn fetch_all(&self) -> Result<Vec<V>, RepositoryError> {
        let rows = self.rows.read();
        let mut entries: Vec<_> = rows.iter().collect();
        entries.sort_by(|(left, _), (right, _)| left.cmp(right));
        Ok(entries.into_iter().map(|(_, value)| value.clone()).collect())
    }

    fn insert(&self, key: K, value: V) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write();
        if rows.contains_key(&key) {
            return Err(RepositoryError::DuplicateKey(format!("{key:?}")));
        }
        rows.insert(key, value);
        Ok(())
    }

    fn update(&self, key: &K, value: V) -> Result<Option<V>, RepositoryError> {
        Ok(self
            .rows
            .write()
            .get_mut(key)
            .map(|slot| std::mem::replace(slot, value)))
    }

    fn delete(&self, key: &K) -> Result<Option<V>, RepositoryError> {
        Ok(self.rows.write().remove(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate_key() {
        let repository = InMemoryRepository::new();
        repository.insert(1, "first").unwrap();
        assert_eq!(
            repository.insert(1, "second"),
            Err(RepositoryError::DuplicateKey("1".to_string()))
        );
        assert_eq!(repository.fetch(&1), Ok(Some("first")));
    }

    #[test]
    fn test_update_missing_row_is_none() {
        let repository: InMemoryRepository<u32, &str> = InMemoryRepository::new();
        assert_eq!(repository.update(&9, "value"), Ok(None));
        assert!(repository.is_empty());
    }

    #[test]
    fn test_fetch_all_is_sorted_by_key() {
        let repository: InMemoryRepository<u32, &str> =
            [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
        assert_eq!(repository.fetch_all(), Ok(vec!["a", "b", "c"]));
        assert_eq!(repository.len(), 3);
    }
}
