//! `strata init`: create the bootstrap directory tree.

use serde_json::json;
use tracing::instrument;

use crate::{
    cli::GlobalArgs,
    commands::{generate_service, project_root},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Create every bootstrap directory that does not exist yet.
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = project_root(&global, &config)?;
    let report = generate_service().init(&root)?;

    if output.is_json() {
        output.json(&json!({
            "root": root,
            "created": report.created,
            "existing": report.existing,
        }))?;
        return Ok(());
    }

    for dir in &report.created {
        output.success(&format!("Created {}", dir.display()))?;
    }
    if report.created.is_empty() {
        output.info(&format!(
            "Layout already present under {} ({} directories)",
            root.display(),
            report.existing.len()
        ))?;
    } else if !report.existing.is_empty() {
        output.info(&format!("{} directories already existed", report.existing.len()))?;
    }

    Ok(())
}
