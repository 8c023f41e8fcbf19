use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Basic cache operations.
///
/// Implementations are best-effort: no durability, no ordering guarantees
/// between keys. `incr` must be atomic within the backend, which is the
/// only synchronization primitive the consistency policy relies on.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value by key; `Ok(None)` is a miss.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a key. Deleting an absent key is a no-op.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Atomically increments an integer key, returning the new value.
    /// An absent key counts from zero.
    async fn incr(&self, key: &str) -> Result<i64>;

    /// Liveness probe for health reporting.
    async fn ping(&self) -> Result<()>;
}
