//! Redis-backed cache.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use userd_core::cache::{Cache, CacheError, Result};

/// Cache over a Redis connection manager.
///
/// The manager multiplexes a single connection and reconnects after a
/// failure; clones share it, so one instance serves all handlers.
#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    /// Connect to Redis at the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let client =
            redis::Client::open(url).map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;
        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;
        Ok(Self { manager })
    }
}

fn op_err(e: redis::RedisError) -> CacheError {
    CacheError::OperationFailed(e.to_string())
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.manager.clone();
        conn.get(key).await.map_err(op_err)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.manager.clone();
        match ttl {
            Some(ttl) => conn
                .set_ex::<_, _, ()>(key, value, ttl.as_secs())
                .await
                .map_err(op_err),
            None => conn.set::<_, _, ()>(key, value).await.map_err(op_err),
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.manager.clone();
        conn.del::<_, ()>(key).await.map_err(op_err)
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        let mut conn = self.manager.clone();
        conn.incr(key, 1i64).await.map_err(op_err)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.manager.clone();
        let () = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(op_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with REDIS_URL set:
    // cargo test -p userd-server -- --ignored

    async fn test_cache() -> RedisCache {
        let url = std::env::var("REDIS_URL").expect("REDIS_URL required");
        RedisCache::connect(&url).await.expect("connect failed")
    }

    #[tokio::test]
    #[ignore = "requires redis"]
    async fn set_get_delete_roundtrip() {
        let cache = test_cache().await;
        let key = "userd:test:roundtrip";

        cache
            .set(key, b"payload", Some(Duration::from_secs(30)))
            .await
            .expect("set failed");

        let value = cache.get(key).await.expect("get failed");
        assert_eq!(value.as_deref(), Some(&b"payload"[..]));

        cache.delete(key).await.expect("delete failed");
        assert_eq!(cache.get(key).await.expect("get failed"), None);
    }

    #[tokio::test]
    #[ignore = "requires redis"]
    async fn get_absent_is_miss() {
        let cache = test_cache().await;
        let value = cache
            .get("userd:test:never-written")
            .await
            .expect("get failed");
        assert_eq!(value, None);
    }

    #[tokio::test]
    #[ignore = "requires redis"]
    async fn delete_absent_is_noop() {
        let cache = test_cache().await;
        cache
            .delete("userd:test:never-written")
            .await
            .expect("delete failed");
    }

    #[tokio::test]
    #[ignore = "requires redis"]
    async fn incr_counts_from_zero() {
        let cache = test_cache().await;
        let key = "userd:test:counter";
        cache.delete(key).await.expect("reset failed");

        let first = cache.incr(key).await.expect("incr failed");
        let second = cache.incr(key).await.expect("incr failed");
        assert_eq!(first, 1);
        assert_eq!(second, 2);

        cache.delete(key).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires redis"]
    async fn ping_succeeds() {
        let cache = test_cache().await;
        cache.ping().await.expect("ping failed");
    }
}
