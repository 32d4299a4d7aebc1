//! Exists and resolve handlers

use anyhow::Result;
use rcsvc_core::Resolver;
use std::io::Write;
use std::process::ExitCode;

use crate::config::Config;

/// Exit successfully iff `service` resolves
pub fn exists(service: &str, config: &Config) -> ExitCode {
    if Resolver::new(&config.layout).exists(service) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print the script `service` resolves to
///
/// An unresolvable service is not reported, only signalled by the exit code.
pub fn print_resolved(service: &str, config: &Config, out: &mut dyn Write) -> Result<ExitCode> {
    match Resolver::new(&config.layout).resolve(service) {
        Ok(path) => {
            writeln!(out, "{}", path.display())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{add_script, tree};

    #[test]
    fn test_print_resolved() {
        let (_dir, config) = tree();
        add_script(&config, "nginx", None);

        let mut out = Vec::new();
        let code = print_resolved("nginx", &config, &mut out).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        let expected = format!("{}\n", config.layout.script_dir.join("nginx").display());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_print_resolved_missing() {
        let (_dir, config) = tree();

        let mut out = Vec::new();
        let code = print_resolved("ghost", &config, &mut out).unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
    }

    #[test]
    fn test_exists() {
        let (_dir, config) = tree();
        add_script(&config, "sshd", None);

        assert_eq!(exists("sshd", &config), ExitCode::SUCCESS);
        assert_eq!(exists("ghost", &config), ExitCode::FAILURE);
        assert_eq!(exists("../sshd", &config), ExitCode::FAILURE);
    }
}
