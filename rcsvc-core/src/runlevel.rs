//! Active runlevel providers
//!
//! The enumerator never works out which runlevels are in effect by itself;
//! it asks an `ActiveRunlevels` implementation. That keeps listing a pure
//! function of its inputs and lets tests supply a fixed set.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::domain::layout::Layout;
use crate::error::{Error, Result};

/// Runlevels that are in effect regardless of the selected one
pub const ALWAYS_ACTIVE: [&str; 2] = ["sysinit", "boot"];

/// Source of the ordered set of currently active runlevels
pub trait ActiveRunlevels {
    /// Returns the active runlevel names in order
    ///
    /// # Errors
    /// Returns `ActiveSetUnavailable` if the set cannot be determined
    fn active_runlevels(&self) -> Result<Vec<String>>;
}

/// A constant set of runlevels
#[derive(Debug, Clone, Default)]
pub struct FixedRunlevels {
    runlevels: Vec<String>,
}

impl FixedRunlevels {
    /// Creates a provider that always returns `runlevels`
    pub fn new<I, S>(runlevels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            runlevels: runlevels.into_iter().map(Into::into).collect(),
        }
    }
}

impl ActiveRunlevels for FixedRunlevels {
    fn active_runlevels(&self) -> Result<Vec<String>> {
        Ok(self.runlevels.clone())
    }
}

/// Reads the selected runlevel from the `softlevel` state file
///
/// The active set is `sysinit`, `boot`, then the selected runlevel, with
/// duplicates dropped.
#[derive(Debug, Clone)]
pub struct SoftlevelFile {
    path: PathBuf,
}

impl SoftlevelFile {
    /// Creates a provider reading the layout's softlevel file
    pub fn new(layout: &Layout) -> Self {
        Self {
            path: layout.softlevel_path(),
        }
    }

    /// Reads the selected runlevel
    pub fn current(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path).map_err(|e| Error::ActiveSetUnavailable {
            message: format!("cannot read {}", self.path.display()),
            source: Some(e),
        })?;

        let runlevel = content.trim();
        if runlevel.is_empty() {
            return Err(Error::active_set_unavailable(format!(
                "{} is empty",
                self.path.display()
            )));
        }

        Ok(runlevel.to_string())
    }
}

impl ActiveRunlevels for SoftlevelFile {
    fn active_runlevels(&self) -> Result<Vec<String>> {
        let current = self.current()?;
        debug!("current runlevel is {}", current);

        let mut runlevels: Vec<String> = ALWAYS_ACTIVE.iter().map(|r| r.to_string()).collect();
        if !runlevels.contains(&current) {
            runlevels.push(current);
        }

        Ok(runlevels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Tree;

    #[test]
    fn test_fixed_runlevels() {
        let provider = FixedRunlevels::new(["default", "boot"]);
        assert_eq!(
            provider.active_runlevels().unwrap(),
            vec!["default".to_string(), "boot".to_string()]
        );
    }

    #[test]
    fn test_softlevel_adds_always_active() {
        let tree = Tree::new();
        tree.softlevel("default\n");

        let provider = SoftlevelFile::new(&tree.layout);
        assert_eq!(
            provider.active_runlevels().unwrap(),
            vec!["sysinit", "boot", "default"]
        );
    }

    #[test]
    fn test_softlevel_no_duplicates() {
        let tree = Tree::new();
        tree.softlevel("boot");

        let provider = SoftlevelFile::new(&tree.layout);
        assert_eq!(provider.active_runlevels().unwrap(), vec!["sysinit", "boot"]);
    }

    #[test]
    fn test_softlevel_missing_file() {
        let tree = Tree::new();

        let provider = SoftlevelFile::new(&tree.layout);
        let result = provider.active_runlevels();

        assert!(matches!(
            result,
            Err(Error::ActiveSetUnavailable {
                source: Some(_),
                ..
            })
        ));
    }

    #[test]
    fn test_softlevel_empty_file() {
        let tree = Tree::new();
        tree.softlevel("  \n");

        let provider = SoftlevelFile::new(&tree.layout);
        let result = provider.active_runlevels();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }
}
