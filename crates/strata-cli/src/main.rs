//! `strata`: place Spring/DDD source stubs in a layered project tree.
//!
//! Every failure is a [`CliError`] that reaches [`report`] in this file;
//! the process exit code is derived from its category.
//!
//! | Exit | Cause |
//! |------|-------|
//! | 0 | done (including overwrites) |
//! | 1 | filesystem or template failure |
//! | 2 | bad arguments or artifact name |
//! | 3 | unknown artifact kind |
//! | 4 | unreadable configuration or unknown config key |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // `--help` and `--version` arrive here too, on stdout with exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("strata: cannot set up logging: {e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    let mut color = !cli.global.no_color && std::io::stderr().is_terminal();

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => return report(CliError::from(e), verbose, color),
    };
    color &= !config.output.no_color;
    debug!(?config, "configuration loaded");

    let output = OutputManager::new(&cli.global, &config);
    match dispatch(cli, config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e, verbose, color),
    }
}

#[instrument(skip_all)]
fn dispatch(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Init => commands::init::execute(cli.global, config, output),
        Commands::Create(args) => commands::create::execute(args, cli.global, config, output),
        Commands::Kinds(args) => commands::kinds::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Log, print to stderr, and pick the exit code.
fn report(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();
    let text = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{text}");
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn version_and_author_come_from_the_manifest() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
        assert_eq!(cmd.get_author(), Some(env!("CARGO_PKG_AUTHORS")));
    }

    #[test]
    fn bare_invocation_prints_help_as_an_error() {
        let err = Cli::try_parse_from(["strata"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn help_is_not_an_error() {
        let err = Cli::try_parse_from(["strata", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
