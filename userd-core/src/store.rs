//! Authoritative store boundary.
//!
//! The server implements this trait over PostgreSQL; the cache decorator
//! wraps any implementation without knowing the backend.

use async_trait::async_trait;
use thiserror::Error;

use crate::user::User;

/// Errors surfaced by a [`UserStore`] implementation.
///
/// `NotFound` and `DuplicateUser` are expected business outcomes; only
/// `Unavailable` indicates infrastructure trouble.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user {id} not found")]
    NotFound { id: i64 },

    #[error("username or email already exists")]
    DuplicateUser,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// CRUD access to the user set.
///
/// Every write is a single-row effect, committed or rolled back as a unit
/// by the backend. Uniqueness of `username` and `email` is enforced by the
/// backend and reported as [`StoreError::DuplicateUser`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user, returning the stored record with its assigned id.
    async fn insert(&self, username: &str, email: &str) -> Result<User>;

    /// Return every user in the store's natural order.
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Fetch a single user by id.
    async fn get_by_id(&self, id: i64) -> Result<User>;

    /// Update username and/or email; `None` leaves a field unchanged.
    ///
    /// At least one field must be `Some`; callers validate that before
    /// reaching the store.
    async fn update(&self, id: i64, username: Option<&str>, email: Option<&str>) -> Result<User>;

    /// Remove a user by id.
    async fn delete(&self, id: i64) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = StoreError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "user 42 not found");
    }

    #[test]
    fn duplicate_display() {
        assert_eq!(
            StoreError::DuplicateUser.to_string(),
            "username or email already exists"
        );
    }
}
