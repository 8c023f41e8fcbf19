//! The user record.

use serde::{Deserialize, Serialize};

/// A user as stored and served.
///
/// `id` is assigned by the store on insert and immutable thereafter.
/// `username` and `email` are unique across all users; the store enforces
/// both constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_shape() {
        let user = User {
            id: 1,
            username: "alice".to_owned(),
            email: "a@x.com".to_owned(),
        };
        let json = serde_json::to_value(&user).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "alice", "email": "a@x.com"})
        );
    }
}
