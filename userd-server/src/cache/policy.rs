//! Read-through cache decorator for the user store.
//!
//! `list_all` is served from a cached snapshot while one is valid;
//! every committed mutation drops the snapshot and bumps a revision
//! counter. Snapshots are tagged with the revision current when they
//! were captured, so a write-back that raced with a mutation is
//! rejected at the next read instead of being served until its TTL
//! runs out. The cache is never on a request's correctness path: any
//! cache failure degrades to a store read or is logged and swallowed.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use userd_core::cache::{
    deserialize_snapshot, serialize_snapshot, Cache, CacheError, UserListSnapshot, USER_LIST_KEY,
    USER_LIST_REVISION_KEY,
};
use userd_core::store::{Result, UserStore};
use userd_core::User;

/// Decorates a [`UserStore`] with the list-snapshot policy.
///
/// The HTTP layer only ever sees the decorated store; single-record
/// reads pass straight through.
pub struct CachedUserStore<S, C> {
    store: S,
    cache: C,
    ttl: Duration,
}

impl<S, C> CachedUserStore<S, C>
where
    S: UserStore,
    C: Cache,
{
    pub fn new(store: S, cache: C, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// Current value of the revision counter.
    ///
    /// An absent or non-numeric counter counts as revision zero; a
    /// snapshot tagged zero still matches until the first mutation
    /// bumps the counter.
    async fn current_revision(&self) -> std::result::Result<u64, CacheError> {
        let bytes = self.cache.get(USER_LIST_REVISION_KEY).await?;
        Ok(bytes
            .and_then(|b| String::from_utf8(b).ok())
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0))
    }

    /// Look up a servable snapshot: present, decodable, and captured at
    /// the given revision. `None` is a miss in all its forms.
    async fn servable_snapshot(&self, revision: u64) -> Option<UserListSnapshot> {
        let bytes = match self.cache.get(USER_LIST_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("user list cache miss");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "cache unreachable reading snapshot, treating as miss");
                return None;
            }
        };

        match deserialize_snapshot(&bytes) {
            Ok(snapshot) if snapshot.revision == revision => Some(snapshot),
            Ok(snapshot) => {
                debug!(
                    cached_revision = snapshot.revision,
                    current_revision = revision,
                    "snapshot revision is stale, treating as miss"
                );
                None
            }
            Err(e) => {
                warn!(error = %e, "undecodable snapshot, treating as miss");
                None
            }
        }
    }

    /// Best-effort write-back of a freshly queried list.
    ///
    /// Tagged with the revision captured before the store query; a
    /// mutation that landed in between has already bumped the counter,
    /// so the next read rejects this snapshot.
    async fn populate(&self, revision: u64, users: &[User]) {
        let snapshot = UserListSnapshot {
            revision,
            users: users.to_vec(),
        };
        let bytes = match serialize_snapshot(&snapshot) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "failed to encode user list snapshot");
                return;
            }
        };
        match self.cache.set(USER_LIST_KEY, &bytes, Some(self.ttl)).await {
            Ok(()) => debug!(
                revision,
                users = users.len(),
                "user list cache populated"
            ),
            Err(e) => warn!(error = %e, "failed to populate user list cache"),
        }
    }

    /// Drop the snapshot and bump the revision counter.
    ///
    /// Called only after the store has committed a mutation. The
    /// mutation already succeeded, so cache failures are logged and
    /// swallowed; the TTL bounds the staleness they can cause.
    async fn invalidate(&self) {
        if let Err(e) = self.cache.delete(USER_LIST_KEY).await {
            warn!(error = %e, "failed to invalidate user list snapshot");
        }
        match self.cache.incr(USER_LIST_REVISION_KEY).await {
            Ok(revision) => debug!(revision, "user list revision bumped"),
            Err(e) => warn!(error = %e, "failed to bump user list revision"),
        }
    }
}

#[async_trait]
impl<S, C> UserStore for CachedUserStore<S, C>
where
    S: UserStore,
    C: Cache,
{
    async fn insert(&self, username: &str, email: &str) -> Result<User> {
        let user = self.store.insert(username, email).await?;
        self.invalidate().await;
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let revision = match self.current_revision().await {
            Ok(revision) => Some(revision),
            Err(e) => {
                warn!(error = %e, "cache unreachable reading revision, treating as miss");
                None
            }
        };

        if let Some(revision) = revision {
            if let Some(snapshot) = self.servable_snapshot(revision).await {
                debug!(
                    revision,
                    users = snapshot.users.len(),
                    "user list cache hit"
                );
                return Ok(snapshot.users);
            }
        }

        let users = self.store.list_all().await?;

        // No write-back when the revision read failed: a snapshot tagged
        // with a guessed revision could be served after a concurrent
        // mutation it does not reflect.
        if let Some(revision) = revision {
            self.populate(revision, &users).await;
        }

        Ok(users)
    }

    async fn get_by_id(&self, id: i64) -> Result<User> {
        self.store.get_by_id(id).await
    }

    async fn update(&self, id: i64, username: Option<&str>, email: Option<&str>) -> Result<User> {
        let user = self.store.update(id, username, email).await?;
        self.invalidate().await;
        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete(id).await?;
        self.invalidate().await;
        Ok(())
    }
}
