//! Render-context assembly.
//!
//! This module is the core of taskrender: it consumes a plain record of
//! already-parsed invocation input ([`RenderInputs`]) and produces one
//! canonical, immutable [`RenderContext`] for the template engine.
//!
//! Assembly is a single synchronous computation with no shared mutable
//! state; the only I/O is reading a local values file or task file. Any
//! error aborts the whole operation, so a caller never sees a partially
//! resolved context.

use crate::defaults::EnvironmentDefaults;
use crate::error::{RenderError, Result};
use crate::values::Values;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::Serialize;


/// Identity metadata for one build invocation.
///
/// The caller-supplied fields are copied verbatim; an empty string means
/// "not supplied" and is not an error, and no fallback substitution is
/// applied to them. `build_date`, `os`, and `architecture` are always
/// stamped by the assembler, never caller-supplied. Fields are set exactly
/// once during assembly and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildIdentity {
    /// The build ID.
    pub id: String,

    /// The commit SHA that triggered the build.
    pub commit: String,

    /// The build repository.
    pub repository: String,

    /// The build branch.
    pub branch: String,

    /// What the build was triggered by.
    pub triggered_by: String,

    /// The git tag.
    pub git_tag: String,

    /// The name of the registry.
    pub registry: String,

    /// UTC timestamp stamped at assembly start.
    pub build_date: DateTime<Utc>,

    /// Operating system of the executing platform.
    pub os: String,

    /// CPU architecture of the executing platform.
    pub architecture: String,
}

/// Reference to the task definition to render.
///
/// Either a path to a task file on disk or inline content decoded from a
/// base64 flag. The task file's own syntax is owned by the template engine;
/// this core only carries the reference through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskRef {
    /// Path to a task file supplied via `--file`.
    Path(String),

    /// Decoded content supplied via `--encoded-file`.
    Inline(String),
}

/// Plain record of invocation input for the assembler.
///
/// This is a pure data carrier: the CLI layer parses flags into this record
/// and passes it by value to [`assemble`], which returns a new immutable
/// context rather than mutating shared state.
#[derive(Debug, Clone, Default)]
pub struct RenderInputs {
    /// Path to a values file (`--values`).
    pub values_file: Option<String>,

    /// Base64-encoded values document (`--encoded-values`). Overrides the
    /// values file on key collision when both are supplied.
    pub encoded_values: Option<String>,

    /// Inline `--set` entries, in the order supplied.
    pub set_values: Vec<String>,

    /// Home volume override (`--homevol`). Empty means use the default.
    pub shared_volume: String,

    /// The build ID (`--id`).
    pub id: String,

    /// The commit SHA (`--commit`).
    pub commit: String,

    /// The build repository (`--repository`).
    pub repository: String,

    /// The build branch (`--branch`).
    pub branch: String,

    /// What the build was triggered by (`--triggered-by`).
    pub triggered_by: String,

    /// The git tag (`--git-tag`).
    pub git_tag: String,

    /// The name of the registry (`--registry`).
    pub registry: String,

    /// Path to the task file (`--file`).
    pub task_file: Option<String>,

    /// Base64-encoded task file content (`--encoded-file`). Overrides the
    /// task file path when both are supplied.
    pub encoded_task_file: Option<String>,
}

/// The fully resolved rendering context.
///
/// Immutable once constructed: `template_values` contains the union of all
/// value sources with precedence applied, and the identity and defaults are
/// stamped in. Safe to share across threads for concurrent template renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    /// Resolved template variables, unique keys, deterministic order.
    pub template_values: Values,

    /// Identity metadata for this invocation.
    pub identity: BuildIdentity,

    /// The home volume to mount, defaulting to the environment's home
    /// volume name when the caller supplies none.
    pub shared_volume: String,

    /// The task definition to render, if the invocation carries one.
    pub task: Option<TaskRef>,

    /// The environment defaults this context was assembled against.
    pub defaults: EnvironmentDefaults,
}

/// Assemble a render context from invocation input.
///
/// Value sources merge in increasing precedence order: values file, then
/// decoded base64 payload, then inline `--set` entries. Higher tiers
/// overwrite lower tiers on key collision regardless of ordering; within
/// the inline tier the later entry wins.
///
/// # Returns
///
/// * `Ok(RenderContext)` - The fully resolved, immutable context
/// * `Err(RenderError)` - Any source failed to read, decode, or parse;
///   no partial context is returned
pub fn assemble(inputs: RenderInputs, defaults: &EnvironmentDefaults) -> Result<RenderContext> {
    let build_date = Utc::now();

    let encoded = match &inputs.encoded_values {
        Some(payload) => Values::from_base64(payload)?,
        None => Values::new(),
    };

    let file = match &inputs.values_file {
        Some(path) => Values::from_file(path)?,
        None => Values::new(),
    };

    let inline = Values::from_set_entries(&inputs.set_values)?;

    let template_values = Values::merged([file, encoded, inline]);

    let identity = BuildIdentity {
        id: inputs.id,
        commit: inputs.commit,
        repository: inputs.repository,
        branch: inputs.branch,
        triggered_by: inputs.triggered_by,
        git_tag: inputs.git_tag,
        registry: inputs.registry,
        build_date,
        os: std::env::consts::OS.to_string(),
        architecture: std::env::consts::ARCH.to_string(),
    };

    let shared_volume = if inputs.shared_volume.is_empty() {
        defaults.home_volume_name.clone()
    } else {
        inputs.shared_volume
    };

    let task = resolve_task_ref(inputs.task_file, inputs.encoded_task_file)?;

    Ok(RenderContext {
        template_values,
        identity,
        shared_volume,
        task,
        defaults: defaults.clone(),
    })
}

/// Resolve the task reference from the `--file` / `--encoded-file` pair.
///
/// Mirrors the values-source rule: decoded base64 content overrides the
/// file path when both are supplied.
fn resolve_task_ref(
    task_file: Option<String>,
    encoded_task_file: Option<String>,
) -> Result<Option<TaskRef>> {
    if let Some(payload) = encoded_task_file {
        let bytes = BASE64
            .decode(payload.trim())
            .map_err(|e| RenderError::Decode(e.to_string()))?;
        let content =
            String::from_utf8(bytes).map_err(|e| RenderError::Decode(e.to_string()))?;
        return Ok(Some(TaskRef::Inline(content)));
    }
    Ok(task_file.map(TaskRef::Path))
}
