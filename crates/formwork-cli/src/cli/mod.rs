//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "formwork",
    bin_name = "formwork",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} React + TypeScript scaffolding",
    long_about = "Formwork generates conventional React + TypeScript \
                  projects, components, and hooks with pre-filled source \
                  and test files.",
    after_help = "EXAMPLES:\n\
        \x20 formwork create-project my-app\n\
        \x20 formwork create-component NavBar\n\
        \x20 formwork create-hook Counter",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a React + TypeScript project with Jest configured.
    #[command(
        name = "create-project",
        visible_alias = "crp",
        about = "Create a React + TypeScript project with Jest",
        after_help = "EXAMPLES:\n\
            \x20 formwork create-project my-app\n\
            \x20 formwork crp my-app\n\n\
            Delegates to `npm create vite@latest` for the project skeleton, \
            then installs Jest and writes example entry/test files."
    )]
    CreateProject(CreateProjectArgs),

    /// Create a typed, tested component under src/components/.
    #[command(
        name = "create-component",
        visible_alias = "crc",
        about = "Create a component with its test file",
        after_help = "EXAMPLES:\n\
            \x20 formwork create-component NavBar\n\
            \x20 formwork crc NavBar\n\n\
            Re-running with the same name overwrites the generated files."
    )]
    CreateComponent(CreateComponentArgs),

    /// Create a stateful hook under src/hooks/.
    #[command(
        name = "create-hook",
        visible_alias = "crh",
        about = "Create a hook",
        after_help = "EXAMPLES:\n\
            \x20 formwork create-hook Counter\n\
            \x20 formwork crh Counter"
    )]
    CreateHook(CreateHookArgs),
}

// ── create-project ────────────────────────────────────────────────────────────

/// Arguments for `formwork create-project`.
#[derive(Debug, Args)]
pub struct CreateProjectArgs {
    /// Directory-safe project name; becomes `./<name>`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,
}

// ── create-component ──────────────────────────────────────────────────────────

/// Arguments for `formwork create-component`.
#[derive(Debug, Args)]
pub struct CreateComponentArgs {
    /// Identifier-safe component name; used for the directory, file names,
    /// the exported symbol, and the `<Name>Props` type.
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: String,
}

// ── create-hook ───────────────────────────────────────────────────────────────

/// Arguments for `formwork create-hook`.
#[derive(Debug, Args)]
pub struct CreateHookArgs {
    /// Identifier-safe hook name; the generated unit is `use<Name>`.
    #[arg(value_name = "NAME", help = "Hook name")]
    pub name: String,
}

// ── tests ─────────────────────────────────────────────────────────────────────
