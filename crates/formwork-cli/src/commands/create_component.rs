//! Implementation of the `formwork create-component` command.

use tracing::{info, instrument};

use crate::{
    cli::{CreateComponentArgs, GlobalArgs},
    commands::{build_engine, report_summary},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `formwork create-component` command.
#[instrument(skip_all, fields(component = %args.name))]
pub fn execute(
    args: CreateComponentArgs,
    _global: GlobalArgs,
    output: OutputManager,
) -> CliResult<()> {
    let engine = build_engine()?;

    info!(component = %args.name, "component scaffold started");
    let summary = engine.scaffold_component(&args.name)?;
    info!(component = %args.name, "component scaffold completed");

    report_summary(&summary, &format!("Component '{}'", args.name), &output)?;
    Ok(())
}
