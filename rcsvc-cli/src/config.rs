//! Configuration module
//!
//! Handles CLI configuration: where scripts, runlevels and runtime state live.

use anyhow::{Context, Result};
use rcsvc_core::Layout;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory layout read by the resolver and enumerator
    pub layout: Layout,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        self.layout
            .validate()
            .context("Refusing to use directory layout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            layout: Layout::default(),
        };
        assert!(config.validate().is_ok());

        config.layout.runlevel_dir = "runlevels".into();
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("runlevel_dir"));
    }
}
