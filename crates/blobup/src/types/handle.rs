//! Account handle type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated AT Protocol account handle.
///
/// Handles are DNS names acting as human-readable account identifiers,
/// e.g. `alice.bsky.social`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    /// Create a new handle from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a plausible handle.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the handle string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::Handle {
                value: s.to_string(),
                reason: "must be non-empty".to_string(),
            }
            .into());
        }

        // Handles are DNS names: at least two dot-separated labels,
        // none of them empty.
        if !s.contains('.') || s.split('.').any(str::is_empty) {
            return Err(InvalidInputError::Handle {
                value: s.to_string(),
                reason: "must be a dotted DNS name".to_string(),
            }
            .into());
        }

        if s.chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '.' || c == '-'))
        {
            return Err(InvalidInputError::Handle {
                value: s.to_string(),
                reason: "contains characters outside [a-zA-Z0-9.-]".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Handle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Handle {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Handle> for String {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_handle() {
        let handle = Handle::new("alice.bsky.social").unwrap();
        assert_eq!(handle.as_str(), "alice.bsky.social");
    }

    #[test]
    fn empty_rejected() {
        assert!(Handle::new("").is_err());
    }

    #[test]
    fn undotted_rejected() {
        assert!(Handle::new("alice").is_err());
    }

    #[test]
    fn trailing_dot_rejected() {
        assert!(Handle::new("alice.bsky.social.").is_err());
    }

    #[test]
    fn invalid_characters_rejected() {
        assert!(Handle::new("alice@bsky.social").is_err());
    }
}
