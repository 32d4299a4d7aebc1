//! Run handler
//!
//! Resolves a service and replaces the current process with its script.

use anyhow::{Result, anyhow};
use rcsvc_core::{Error, Resolver};
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, ExitCode};
use tracing::debug;

use crate::config::Config;

/// Exec the script for `service` with `args`
///
/// Only returns on failure. With `if_exists`, a service that cannot be found
/// is not an error and exits successfully.
pub fn run_service(
    service: &str,
    args: &[String],
    if_exists: bool,
    config: &Config,
) -> Result<ExitCode> {
    let script = match Resolver::new(&config.layout).resolve(service) {
        Ok(script) => script,
        Err(e) if tolerated(&e, if_exists) => {
            debug!("{}, nothing to do", e);
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(e.into()),
    };

    Err(exec(&script, args))
}

/// Whether a resolution failure is swallowed under `--ifexists`
fn tolerated(err: &Error, if_exists: bool) -> bool {
    if_exists && err.is_missing()
}

fn exec(script: &Path, args: &[String]) -> anyhow::Error {
    debug!("exec {} {:?}", script.display(), args);

    let err = Command::new(script).arg0(script).args(args).exec();
    anyhow!("{}: {}", script.display(), err)
}
