//! Redis cache client and the list-consistency policy.
//!
//! [`RedisCache`] implements the backend-agnostic `Cache` trait from
//! userd-core; [`CachedUserStore`] wraps any `UserStore` with the
//! read-through/invalidate-on-write policy for the user list.

pub mod policy;
pub mod redis;

pub use policy::CachedUserStore;
pub use redis::RedisCache;
