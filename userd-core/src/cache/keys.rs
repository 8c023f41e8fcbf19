//! Cache key layout.
//!
//! Two keys cover the whole cache surface: the serialized list snapshot
//! and the revision counter used to reject stale snapshot write-backs.

/// Key holding the serialized [`UserListSnapshot`](super::UserListSnapshot).
pub const USER_LIST_KEY: &str = "users:all";

/// Key holding the list revision counter.
///
/// Incremented atomically on every committed mutation; never expires.
pub const USER_LIST_REVISION_KEY: &str = "users:rev";
