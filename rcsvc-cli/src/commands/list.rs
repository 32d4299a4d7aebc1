//! List handler

use anyhow::{Context, Result};
use rcsvc_core::{Enumerator, SoftlevelFile};
use std::io::Write;
use std::process::ExitCode;

use crate::config::Config;

/// Print the services in `runlevels`, one per line
///
/// With no runlevels the active set is read from the softlevel file. An
/// empty listing is printed as nothing and exits unsuccessfully.
pub fn list_services(
    runlevels: &[String],
    json: bool,
    config: &Config,
    out: &mut dyn Write,
) -> Result<ExitCode> {
    let active = SoftlevelFile::new(&config.layout);
    let listing = Enumerator::new(&config.layout, &active)
        .list(runlevels)
        .context("Failed to list services")?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
    } else {
        for service in &listing.services {
            writeln!(out, "{}", service)?;
        }
    }

    if listing.has_no_services() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
