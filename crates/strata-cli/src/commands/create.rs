//! Implementation of the `strata create` command.
//!
//! Responsibility: hand kind and name to the core generate service and
//! display results.  Kind and name validation happen in the core.

use std::path::Path;

use serde_json::json;
use tracing::{info, instrument};

use strata_core::{application::GenerationReport, domain::GenerationPlan};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    commands::{generate_service, project_root},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute `strata create <kind> <name>`.
#[instrument(skip_all, fields(kind = %args.kind, name = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = project_root(&global, &config)?;
    let service = generate_service();

    if args.dry_run {
        let plan = service.plan(&args.kind, &args.name)?;
        return show_plan(&plan, &root, &output);
    }

    let report = service.create(&args.kind, &args.name, &root)?;
    info!(files = report.files.len(), "Artifact generated");
    show_report(&report, &output)
}

fn show_plan(plan: &GenerationPlan, root: &Path, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let files: Vec<_> = plan
            .targets()
            .map(|t| {
                json!({
                    "path": t.to_string(),
                    "template": t.template.as_str(),
                })
            })
            .collect();
        output.json(&json!({
            "dry_run": true,
            "kind": plan.kind,
            "name": plan.name.raw(),
            "files": files,
        }))?;
        return Ok(());
    }

    output.header(&format!("Dry run: {} '{}'", plan.kind, plan.name))?;
    for target in plan.targets() {
        let path = root.join(target.relative_file());
        output.info(&format!("would write {} ({})", path.display(), target.template))?;
    }
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let files: Vec<_> = report
            .files
            .iter()
            .map(|f| {
                json!({
                    "path": f.path,
                    "template": f.template.as_str(),
                    "overwritten": f.overwritten,
                })
            })
            .collect();
        output.json(&json!({
            "kind": report.plan.kind,
            "name": report.plan.name.raw(),
            "files": files,
        }))?;
        return Ok(());
    }

    for file in &report.files {
        if file.overwritten {
            output.warning(&format!("Overwrote {}", file.path.display()))?;
        } else {
            output.success(&format!("Created {}", file.path.display()))?;
        }
    }
    Ok(())
}
