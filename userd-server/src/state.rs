//! Application state shared across handlers

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::cache::{CachedUserStore, RedisCache};
use crate::db::PgUserStore;

/// Shared application state
///
/// Handlers go through the decorated store; the raw pool and cache
/// handles exist only for health probes.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: CachedUserStore<PgUserStore, RedisCache>,
    pool: PgPool,
    cache: RedisCache,
}

impl AppState {
    pub fn new(pool: PgPool, cache: RedisCache, cache_ttl: Duration) -> Self {
        let store = CachedUserStore::new(PgUserStore::new(pool.clone()), cache.clone(), cache_ttl);
        Self {
            inner: Arc::new(AppStateInner { store, pool, cache }),
        }
    }

    pub fn store(&self) -> &CachedUserStore<PgUserStore, RedisCache> {
        &self.inner.store
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn cache(&self) -> &RedisCache {
        &self.inner.cache
    }
}
