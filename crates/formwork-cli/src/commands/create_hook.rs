//! Implementation of the `formwork create-hook` command.

use tracing::{info, instrument};

use crate::{
    cli::{CreateHookArgs, GlobalArgs},
    commands::{build_engine, report_summary},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `formwork create-hook` command.
#[instrument(skip_all, fields(hook = %args.name))]
pub fn execute(args: CreateHookArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let engine = build_engine()?;

    info!(hook = %args.name, "hook scaffold started");
    let summary = engine.scaffold_hook(&args.name)?;
    info!(hook = %args.name, "hook scaffold completed");

    report_summary(&summary, &format!("Hook 'use{}'", args.name), &output)?;
    Ok(())
}
