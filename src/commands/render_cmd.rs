//! Implementation of the `taskrender render` command.
//!
//! Converts parsed CLI arguments into a plain input record, runs the
//! assembler against the process-wide environment defaults, and emits the
//! resolved context in the requested format.

use crate::cli::{OutputFormat, RenderArgs};
use crate::defaults::EnvironmentDefaults;
use crate::error::{RenderError, Result};
use crate::render::{self, RenderContext, RenderInputs};

/// Execute the `taskrender render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let output = args.output;
    let defaults = EnvironmentDefaults::default();

    let context = render::assemble(args.into(), &defaults)?;

    print!("{}", emit(&context, output)?);
    Ok(())
}

/// Serialize the resolved context in the requested output format.
fn emit(context: &RenderContext, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(context).map_err(|e| {
            RenderError::UserError(format!("failed to serialize context to YAML: {}", e))
        }),
        OutputFormat::Json => serde_json::to_string_pretty(context)
            .map(|s| s + "\n")
            .map_err(|e| {
                RenderError::UserError(format!("failed to serialize context to JSON: {}", e))
            }),
    }
}

impl From<RenderArgs> for RenderInputs {
    fn from(args: RenderArgs) -> Self {
        Self {
            values_file: args.values,
            encoded_values: args.encoded_values,
            set_values: args.set,
            shared_volume: args.homevol,
            id: args.id,
            commit: args.commit,
            repository: args.repository,
            branch: args.branch,
            triggered_by: args.triggered_by,
            git_tag: args.git_tag,
            registry: args.registry,
            task_file: args.file,
            encoded_task_file: args.encoded_file,
        }
    }
}
