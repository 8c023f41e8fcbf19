//! Email validation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length, matching the users.email column width.
const MAX_EMAIL_LEN: usize = 120;

/// Minimal local@domain shape; full RFC validation is the mail system's
/// problem, not ours.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email address.
    ///
    /// # Rules
    /// - Non-empty after trimming
    /// - Max 120 characters
    /// - `local@domain.tld` shape, no whitespace
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if trimmed.len() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }

        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like local@domain",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the email as a string slice.
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
    fn accepts_plain_addresses() {
        assert!(Email::new("a@x.com").is_ok());
        assert!(Email::new("alice+tag@example.co.uk").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Email::new(""),
            Err(ValidationError::Empty { field: "email" })
        ));
    }

    #[test]
    fn rejects_missing_at() {
        assert!(matches!(
            Email::new("alice.example.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_whitespace_inside() {
        assert!(matches!(
            Email::new("a lice@example.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_too_long() {
        let local = "a".repeat(115);
        let long = format!("{}@x.com", local);
        assert!(matches!(
            Email::new(&long),
            Err(ValidationError::TooLong { max: 120, .. })
        ));
    }
}
