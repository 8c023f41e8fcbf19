//! PostgreSQL access: pool, schema bootstrap, and the user repository.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, ping};
pub use repos::PgUserStore;
