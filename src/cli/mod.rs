//! CLI argument parsing for taskrender.
//!
//! Uses clap derive macros for declarative argument definitions. This module
//! defines the command structure; actual implementations are in the
//! `commands` module, which converts parsed arguments into plain input
//! records for the assembler.

use clap::{Parser, Subcommand, ValueEnum};

/// Taskrender: render-context assembly for containerized build tasks.
///
/// Merges build-identity metadata, environment defaults, and template values
/// from up to three competing sources (values file, base64 payload, inline
/// `--set` entries) into one canonical rendering context.
#[derive(Parser, Debug)]
#[command(name = "taskrender")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for taskrender.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble and emit the resolved render context.
    ///
    /// Merges all value sources by precedence (inline `--set` entries over
    /// the encoded payload over the values file), stamps in build identity
    /// and environment defaults, and prints the canonical context.
    Render(RenderArgs),

    /// Print the fixed build-environment defaults table.
    Defaults,
}

/// Output format for the emitted context.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML document (default).
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// The values file to use.
    #[arg(long)]
    pub values: Option<String>,

    /// A Base64 encoded values file (overrides the values file if one is specified).
    #[arg(long)]
    pub encoded_values: Option<String>,

    /// Set values on the command line (use `--set` multiple times or use commas: key1=val1,key2=val2).
    #[arg(long)]
    pub set: Vec<String>,

    /// The home volume to use.
    #[arg(long, default_value = "")]
    pub homevol: String,

    /// The build ID.
    #[arg(long, default_value = "")]
    pub id: String,

    /// The commit SHA.
    #[arg(short, long, default_value = "")]
    pub commit: String,

    /// The build repository.
    #[arg(long, default_value = "")]
    pub repository: String,

    /// The build branch.
    #[arg(short, long, default_value = "")]
    pub branch: String,

    /// What the build was triggered by.
    #[arg(long, default_value = "")]
    pub triggered_by: String,

    /// The git tag.
    #[arg(long, default_value = "")]
    pub git_tag: String,

    /// The name of the registry.
    #[arg(short, long, default_value = "")]
    pub registry: String,

    /// The task file to use.
    #[arg(short, long)]
    pub file: Option<String>,

    /// A Base64 encoded task file.
    #[arg(long)]
    pub encoded_file: Option<String>,

    /// Output format for the resolved context.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
