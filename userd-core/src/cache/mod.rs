//! Ephemeral cache boundary and the list-snapshot codec.
//!
//! The cache holds one derived, disposable projection: a snapshot of the
//! full user list tagged with the revision current when it was captured.
//! Everything here is backend-agnostic; the server provides the Redis
//! implementation.

pub mod error;
pub mod keys;
pub mod snapshot;
pub mod traits;

pub use error::{CacheError, Result};
pub use keys::{USER_LIST_KEY, USER_LIST_REVISION_KEY};
pub use snapshot::{deserialize_snapshot, serialize_snapshot, UserListSnapshot};
pub use traits::Cache;
