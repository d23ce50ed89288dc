//! Diagnostics subscriber for the `strata` binary.
//!
//! The library crates emit events; this module is the one place that
//! decides where they go.  Events are written to stderr so stdout stays
//! reserved for command output (and parseable under `--output-format json`).
//!
//! `-q` shows errors only, no flag shows warnings, and each `-v` lowers the
//! threshold one step down to trace.  A set `RUST_LOG` replaces all of it.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events pass the default filter.
const WORKSPACE_TARGETS: [&str; 3] = ["strata", "strata_core", "strata_adapters"];

/// Install the stderr subscriber.  Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => workspace_filter(level_for(args.quiet, args.verbose))?,
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

fn level_for(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Same threshold for every workspace crate, nothing from dependencies.
fn workspace_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
    let directives = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    Ok(EnvFilter::try_new(directives)?)
}
