//! Command handlers, one module per subcommand.

use std::path::PathBuf;

use strata_adapters::{LocalFilesystem, SpringTemplates};
use strata_core::application::GenerateService;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub mod completions;
pub mod config;
pub mod create;
pub mod init;
pub mod kinds;

/// Production wiring: built-in templates over the real filesystem.
pub(crate) fn generate_service() -> GenerateService {
    GenerateService::new(
        Box::new(SpringTemplates::new()),
        Box::new(LocalFilesystem::new()),
    )
}

/// Project root: `--root`, then `project.root` from config, then the
/// working directory.  Relative roots are kept relative.
pub(crate) fn project_root(global: &GlobalArgs, config: &AppConfig) -> CliResult<PathBuf> {
    if let Some(root) = global.root.as_ref().or(config.project.root.as_ref()) {
        return Ok(root.clone());
    }
    std::env::current_dir().with_cli_context(|| "failed to determine the working directory")
}
