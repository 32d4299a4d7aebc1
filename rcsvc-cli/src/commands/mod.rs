//! Commands module
//!
//! Defines the dispatcher modes and their handlers.

mod list;
mod resolve;
mod run;

use anyhow::Result;
use std::io::Write;
use std::process::ExitCode;

use crate::config::Config;

/// What the dispatcher was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Succeed iff the service resolves
    Exists { service: String },
    /// Print the script a service resolves to
    Resolve { service: String },
    /// Print the services in the given runlevels (active set if empty)
    List { runlevels: Vec<String>, json: bool },
    /// Replace this process with the service script
    Run {
        service: String,
        args: Vec<String>,
        if_exists: bool,
    },
}

/// Handle a dispatcher action
///
/// Routes the action to the appropriate handler module. Output meant for
/// the caller goes to `out`; diagnostics go through `tracing`.
///
/// # Arguments
/// * `action` - The action to perform
/// * `config` - The CLI configuration
/// * `out` - Where listings and resolved paths are written
pub fn handle_action(action: Action, config: &Config, out: &mut dyn Write) -> Result<ExitCode> {
    match action {
        Action::Exists { service } => Ok(resolve::exists(&service, config)),
        Action::Resolve { service } => resolve::print_resolved(&service, config, out),
        Action::List { runlevels, json } => list::list_services(&runlevels, json, config, out),
        Action::Run {
            service,
            args,
            if_exists,
        } => run::run_service(&service, &args, if_exists, config),
    }
}
