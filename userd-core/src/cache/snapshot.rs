//! List-snapshot type and its byte codec.
//!
//! Snapshots are stored as JSON so cached values stay inspectable with
//! ordinary Redis tooling. Deserialization is schema-checked; bytes that
//! fail to decode are treated by callers as a cache miss, never evaluated
//! or trusted.

use serde::{Deserialize, Serialize};

use super::error::{CacheError, Result};
use crate::user::User;

/// A cached copy of the full user list.
///
/// `revision` records the value of the revision counter at capture time.
/// A snapshot whose revision no longer matches the counter was written
/// back by a list read that raced with a mutation and must not be served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListSnapshot {
    pub revision: u64,
    pub users: Vec<User>,
}

/// Serializes a snapshot to JSON bytes.
pub fn serialize_snapshot(snapshot: &UserListSnapshot) -> Result<Vec<u8>> {
    serde_json::to_vec(snapshot).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Deserializes JSON bytes to a snapshot.
pub fn deserialize_snapshot(bytes: &[u8]) -> Result<UserListSnapshot> {
    serde_json::from_slice(bytes).map_err(|e| CacheError::Serialization(e.to_string()))
}
