//! Validated request field types.

pub mod email;
pub mod username;
pub mod validation;

pub use email::Email;
pub use username::Username;
pub use validation::ValidationError;
