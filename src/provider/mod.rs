//! Data access returning outcomes.
//!
//! A storage backend implements [`Repository`] with ordinary `Result`s.
//! [`CrudProvider`] wraps it at the `try_catch` boundary so callers only see
//! [`Outcome`](crate::outcome::Outcome)s: a missing row becomes a no-data
//! failure and a backend error or panic becomes an exception.
//! [`InMemoryRepository`] is a ready-made backend for tests and prototypes.

mod crud;
mod in_memory;
mod repository;

pub use crud::CrudProvider;
pub use in_memory::InMemoryRepository;
pub use repository::{Repository, RepositoryError};
