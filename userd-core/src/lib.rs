//! userd-core: domain types and collaborator boundaries for userd
//!
//! Infrastructure-free layer shared by the server: the `User` record,
//! the `UserStore` trait with its error taxonomy, and the `Cache` trait
//! with the list-snapshot codec.

pub mod cache;
pub mod store;
pub mod user;

pub use store::{StoreError, UserStore};
pub use user::User;
