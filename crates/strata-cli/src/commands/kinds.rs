//! Implementation of the `strata kinds` command.

use strata_core::domain::PathResolver;

use crate::{
    cli::{KindsArgs, KindsFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: KindsArgs, output: OutputManager) -> CliResult<()> {
    let rules = PathResolver::rules();

    match args.format {
        KindsFormat::Table => {
            output.header("Artifact kinds:")?;
            let width = rules
                .iter()
                .map(|r| r.kind.as_str().len())
                .max()
                .unwrap_or(0);
            for rule in &rules {
                output.print(&format!(
                    "  {:<width$}  {}/{}",
                    rule.kind.as_str(),
                    rule.directory,
                    rule.file
                ))?;
            }
        }

        // One token per line; bypasses quiet so it can feed scripts.
        KindsFormat::List => {
            for rule in &rules {
                println!("{}", rule.kind);
            }
        }

        KindsFormat::Json => output.json(&rules)?,
    }

    Ok(())
}
