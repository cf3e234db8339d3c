//! Login credentials type.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Login credentials for AT Protocol authentication.
///
/// Holds the identifier (handle or DID) and the account password or
/// app password. Both must be non-empty; the constructor rejects blank
/// values so a misconfigured caller fails before any network traffic.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use blobup::Credentials;
///
/// let creds = Credentials::new("alice.bsky.social", "app-password-here").unwrap();
/// assert_eq!(creds.identifier(), "alice.bsky.social");
/// ```
#[derive(Clone)]
pub struct Credentials {
    identifier: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `identifier` - A handle (e.g., "alice.bsky.social") or DID
    /// * `password` - The account password or an app password
    ///
    /// # Errors
    ///
    /// Returns an error if either value is empty.
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Result<Self, Error> {
        let identifier = identifier.into();
        let password = password.into();

        if identifier.trim().is_empty() {
            return Err(InvalidInputError::Credentials {
                reason: "identifier must be non-empty".to_string(),
            }
            .into());
        }
        if password.is_empty() {
            return Err(InvalidInputError::Credentials {
                reason: "password must be non-empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            identifier,
            password,
        })
    }

    /// Returns the identifier (handle or DID).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("alice.bsky.social", "secret123").unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice.bsky.social"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn empty_identifier_rejected() {
        assert!(Credentials::new("", "secret").is_err());
        assert!(Credentials::new("   ", "secret").is_err());
    }

    #[test]
    fn empty_password_rejected() {
        assert!(Credentials::new("alice.bsky.social", "").is_err());
    }
}
