//! userd-server: user CRUD over PostgreSQL with a Redis list cache
//!
//! The HTTP layer is thin glue; the interesting part is
//! [`cache::CachedUserStore`], which keeps the cached user list from
//! diverging from store state by more than its TTL and rejects snapshot
//! write-backs that raced with a mutation.

pub mod cache;
pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::Config;
pub use http::{run_server, ServerConfig};
pub use state::AppState;
