//! Username validation.

use super::ValidationError;

/// Maximum length, matching the users.username column width.
const MAX_USERNAME_LEN: usize = 80;

/// Validated username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    ///
    /// # Rules
    /// - Non-empty after trimming
    /// - Max 80 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }

        if trimmed.len() > MAX_USERNAME_LEN {
            return Err(ValidationError::TooLong {
                field: "username",
                max: MAX_USERNAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(Username::new("alice").is_ok());
        assert!(Username::new("Alice Smith").is_ok());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = Username::new("  alice  ").expect("valid");
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty { field: "username" })
        ));
    }

    #[test]
    fn rejects_too_long() {
        let long = "a".repeat(81);
        assert!(matches!(
            Username::new(&long),
            Err(ValidationError::TooLong { max: 80, .. })
        ));
    }

    #[test]
    fn accepts_boundary_length() {
        let exact = "a".repeat(80);
        assert!(Username::new(&exact).is_ok());
    }
}
