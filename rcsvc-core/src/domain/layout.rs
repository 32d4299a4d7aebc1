//! Directory layout
//!
//! Where service scripts, runlevel membership directories and runtime state
//! live on disk.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default directory holding service scripts
pub const DEFAULT_SCRIPT_DIR: &str = "/etc/init.d";

/// Default parent directory of all runlevel directories
pub const DEFAULT_RUNLEVEL_DIR: &str = "/etc/runlevels";

/// Default runtime state directory
pub const DEFAULT_STATE_DIR: &str = "/run/openrc";

/// Locations the resolver and enumerator read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Canonical directory with one entry per installed service
    pub script_dir: PathBuf,

    /// Directory containing one subdirectory per runlevel
    pub runlevel_dir: PathBuf,

    /// Runtime state directory (holds the `softlevel` file)
    pub state_dir: PathBuf,
}

impl Layout {
    /// Creates a layout from explicit directories
    pub fn new(
        script_dir: impl Into<PathBuf>,
        runlevel_dir: impl Into<PathBuf>,
        state_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            script_dir: script_dir.into(),
            runlevel_dir: runlevel_dir.into(),
            state_dir: state_dir.into(),
        }
    }

    /// Directory holding the membership markers of one runlevel
    ///
    /// The caller is expected to have validated `runlevel` already.
    pub fn runlevel_path(&self, runlevel: &str) -> PathBuf {
        self.runlevel_dir.join(runlevel)
    }

    /// File naming the currently selected runlevel
    pub fn softlevel_path(&self) -> PathBuf {
        self.state_dir.join("softlevel")
    }

    /// Validates the layout
    pub fn validate(&self) -> Result<()> {
        check_absolute("script_dir", &self.script_dir)?;
        check_absolute("runlevel_dir", &self.runlevel_dir)?;
        check_absolute("state_dir", &self.state_dir)?;
        Ok(())
    }
}

fn check_absolute(field: &str, path: &Path) -> Result<()> {
    if !path.is_absolute() {
        return Err(Error::InvalidLayout(format!(
            "{} must be an absolute path, got {}",
            field,
            path.display()
        )));
    }
    Ok(())
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT_DIR, DEFAULT_RUNLEVEL_DIR, DEFAULT_STATE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = Layout::default();
        assert_eq!(layout.script_dir, PathBuf::from("/etc/init.d"));
        assert_eq!(
            layout.runlevel_path("default"),
            PathBuf::from("/etc/runlevels/default")
        );
        assert_eq!(
            layout.softlevel_path(),
            PathBuf::from("/run/openrc/softlevel")
        );
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_validation() {
        let mut layout = Layout::default();

        layout.script_dir = PathBuf::from("init.d");
        assert!(matches!(layout.validate(), Err(Error::InvalidLayout(_))));

        layout.script_dir = PathBuf::from("/etc/init.d");
        layout.state_dir = PathBuf::from("run");
        assert!(layout.validate().is_err());

        layout.state_dir = PathBuf::from("/run/openrc");
        assert!(layout.validate().is_ok());
    }
}
