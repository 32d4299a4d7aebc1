//! Error types for service resolution and enumeration

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why an indirection chain could not be followed to a script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokenLinkReason {
    /// The chain ends on a target that does not exist
    Dangling,
    /// The chain is longer than the resolver is willing to follow (or cyclic)
    TooDeep,
}

impl std::fmt::Display for BrokenLinkReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrokenLinkReason::Dangling => write!(f, "target does not exist"),
            BrokenLinkReason::TooDeep => write!(f, "too many levels of indirection"),
        }
    }
}

/// Errors that can occur while resolving or listing services
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed service or runlevel name
    #[error("invalid name `{0}'")]
    InvalidName(String),

    /// No such service in the script directory
    #[error("service `{0}' does not exist")]
    NotFound(String),

    /// The script entry exists but its indirection chain is broken
    #[error("service `{name}' is a broken link at {}: {reason}", .path.display())]
    BrokenLink {
        /// Service being resolved
        name: String,
        /// Last path reached while following the chain
        path: PathBuf,
        /// What went wrong
        reason: BrokenLinkReason,
    },

    /// The active runlevel set could not be determined
    #[error("cannot determine active runlevels: {message}")]
    ActiveSetUnavailable {
        /// Human readable description
        message: String,
        /// Underlying I/O failure, if any
        #[source]
        source: Option<std::io::Error>,
    },

    /// The directory layout is unusable
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

impl Error {
    /// Create an `ActiveSetUnavailable` error without an underlying cause
    pub fn active_set_unavailable(message: impl Into<String>) -> Self {
        Self::ActiveSetUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Check if this error means the service simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error means the service could not be found on disk,
    /// either because it is absent or because its link is broken
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::BrokenLink { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing_covers_broken_links() {
        let err = Error::BrokenLink {
            name: "sshd".to_string(),
            path: PathBuf::from("/etc/init.d/sshd"),
            reason: BrokenLinkReason::Dangling,
        };
        assert!(err.is_missing());
        assert!(!err.is_not_found());

        assert!(Error::NotFound("sshd".to_string()).is_missing());
        assert!(!Error::InvalidName("..".to_string()).is_missing());
        assert!(!Error::active_set_unavailable("nope").is_missing());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::NotFound("ghost".to_string());
        assert_eq!(err.to_string(), "service `ghost' does not exist");

        let err = Error::BrokenLink {
            name: "loop".to_string(),
            path: PathBuf::from("/etc/init.d/loop"),
            reason: BrokenLinkReason::TooDeep,
        };
        assert!(err.to_string().contains("too many levels"));
    }
}
