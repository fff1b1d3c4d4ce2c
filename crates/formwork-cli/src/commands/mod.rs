//! Command handlers.
//!
//! Each handler translates already-parsed CLI arguments into a core engine
//! call and displays the result. No scaffolding logic lives here.

pub mod create_component;
pub mod create_hook;
pub mod create_project;

use std::env;

use formwork_adapters::{LocalFilesystem, ProcessBootstrap};
use formwork_core::application::{ScaffoldEngine, Summary};

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Build the production engine rooted at the current working directory.
///
/// The root is resolved here, once, and injected — the core never reads
/// ambient process state.
pub(crate) fn build_engine() -> CliResult<ScaffoldEngine> {
    let root = env::current_dir().map_err(|e| CliError::IoError {
        message: "cannot determine current working directory".into(),
        source: e,
    })?;

    Ok(ScaffoldEngine::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessBootstrap::new()),
        root,
    ))
}

/// Print a scaffold summary in the resolved output format.
///
/// JSON mode emits only the machine-readable payload; human/plain modes get
/// the success line plus the written file list.
pub(crate) fn report_summary(
    summary: &Summary,
    what: &str,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.payload(&serde_json::to_string_pretty(summary)?)?;
        return Ok(());
    }

    output.success(&format!(
        "{what} created in {}",
        summary.target.display()
    ))?;
    for path in &summary.written {
        output.print(&format!("  {}", path.display()))?;
    }
    Ok(())
}
