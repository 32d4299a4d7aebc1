//! rc-service
//!
//! Locates service scripts by name, lists the services in runlevels, and
//! runs a service script with the remaining arguments.

mod commands;
mod config;
mod report;

use anyhow::{Result, bail};
use clap::{ArgGroup, Parser};
use commands::{Action, handle_action};
use config::Config;
use rcsvc_core::Layout;
use rcsvc_core::domain::layout::{DEFAULT_RUNLEVEL_DIR, DEFAULT_SCRIPT_DIR, DEFAULT_STATE_DIR};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rc-service", version)]
#[command(about = "Locate, list and run service scripts", long_about = None)]
#[command(group(ArgGroup::new("mode").args(["exists", "list", "resolve"])))]
struct Cli {
    /// Test whether the service exists
    #[arg(short, long, value_name = "SERVICE")]
    exists: Option<String>,

    /// If the service exists then run the command
    #[arg(short, long)]
    ifexists: bool,

    /// List the services in the active (or given) runlevels
    #[arg(short, long)]
    list: bool,

    /// Resolve the service name to an init script
    #[arg(short, long, value_name = "SERVICE")]
    resolve: Option<String>,

    /// Runlevel to list instead of the active set (repeatable)
    #[arg(long = "runlevel", value_name = "RUNLEVEL", requires = "list")]
    runlevels: Vec<String>,

    /// Print the listing as JSON, including stale memberships
    #[arg(long, requires = "list")]
    json: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print debug output
    #[arg(short, long)]
    verbose: bool,

    /// Disable color output
    #[arg(short = 'C', long)]
    nocolor: bool,

    /// Directory holding service scripts
    #[arg(long, env = "RC_INITDIR", default_value = DEFAULT_SCRIPT_DIR)]
    initdir: PathBuf,

    /// Directory holding one directory per runlevel
    #[arg(long, env = "RC_RUNLEVELDIR", default_value = DEFAULT_RUNLEVEL_DIR)]
    runleveldir: PathBuf,

    /// Runtime state directory
    #[arg(long, env = "RC_SVCDIR", default_value = DEFAULT_STATE_DIR)]
    svcdir: PathBuf,

    /// Service to run
    #[arg(value_name = "SERVICE", conflicts_with = "mode")]
    service: Option<String>,

    /// Command and arguments passed to the service script
    #[arg(
        value_name = "CMD",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        requires = "service"
    )]
    args: Vec<String>,
}

impl Cli {
    /// Turn the parsed flags into a single action
    fn action(&self) -> Result<Action> {
        if let Some(service) = &self.exists {
            return Ok(Action::Exists {
                service: service.clone(),
            });
        }
        if let Some(service) = &self.resolve {
            return Ok(Action::Resolve {
                service: service.clone(),
            });
        }
        if self.list {
            return Ok(Action::List {
                runlevels: self.runlevels.clone(),
                json: self.json,
            });
        }

        match &self.service {
            Some(service) => Ok(Action::Run {
                service: service.clone(),
                args: self.args.clone(),
                if_exists: self.ifexists,
            }),
            None => bail!("you need to specify a service"),
        }
    }

    fn config(&self) -> Config {
        Config {
            layout: Layout::new(&self.initdir, &self.runleveldir, &self.svcdir),
        }
    }

    /// Default log filter when RUST_LOG is not set
    fn log_filter(&self) -> &'static str {
        if self.quiet {
            "rcsvc_core=error,rc_service=error"
        } else if self.verbose {
            "rcsvc_core=debug,rc_service=debug"
        } else {
            "rcsvc_core=warn,rc_service=warn"
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.nocolor {
        colored::control::set_override(false);
    }

    // Stdout carries listings and paths, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            report::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = cli.config();
    config.validate()?;

    let action = cli.action()?;
    let stdout = std::io::stdout();
    handle_action(action, &config, &mut stdout.lock())
}
