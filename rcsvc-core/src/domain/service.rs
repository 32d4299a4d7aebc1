//! Service name domain type

use serde::Serialize;

use crate::error::{Error, Result};

/// Name of a service, validated so it can be joined onto a managed directory
///
/// Ordering is byte-wise lexicographic on the UTF-8 bytes, independent of
/// locale, which is the order listings are returned in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Parse a service name
    ///
    /// Rejects the empty string, `.`, `..`, and anything containing a path
    /// separator or a NUL byte. No filesystem access happens here.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty()
            || input == "."
            || input == ".."
            || input.contains('/')
            || input.contains('\0')
        {
            return Err(Error::InvalidName(input.to_string()));
        }

        Ok(Self(input.to_string()))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ServiceName {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        ServiceName::parse(s)
    }
}
