//! Implementation of the `formwork create-project` command.
//!
//! Responsibility: hand the project name to the core engine and display
//! results. The engine owns validation, the existence check, the bootstrap
//! delegation, and file writing.

use tracing::{info, instrument};

use crate::{
    cli::{CreateProjectArgs, GlobalArgs},
    commands::{build_engine, report_summary},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `formwork create-project` command.
///
/// The bootstrap process (npm/vite) inherits this terminal, so its own
/// progress output appears between our header and the summary.
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: CreateProjectArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let engine = build_engine()?;

    output.header(&format!("Creating project '{}'...", args.name))?;
    info!(project = %args.name, "project scaffold started");

    let summary = engine.scaffold_project(&args.name)?;

    info!(project = %args.name, "project scaffold completed");
    report_summary(&summary, &format!("Project '{}'", args.name), &output)?;

    // Next steps, matching what a fresh vite project expects.
    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", args.name))?;
        output.print("  npm install")?;
        output.print("  npm run dev")?;
    }

    Ok(())
}
