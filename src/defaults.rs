//! Fixed build-environment defaults.
//!
//! Every build runs against the same container layout: a workspace directory,
//! a named volume for `$HOME`, and a handful of registry conventions. These
//! values live in one immutable table so that the rest of the system reads
//! them from a single change point instead of hardcoding literals.
//!
//! The table is constructed once at process start and passed by reference to
//! the assembler; construction cannot fail.

use serde::Serialize;

/// Placeholder for "no base image".
///
/// `:latest` is not valid in a base-image reference, but tags are always
/// normalized to `:latest` during processing, so this synthetic identifier is
/// used internally and never sent to a registry as-is.
pub const NO_BASE_IMAGE_SPECIFIER: &str = "scratch:latest";

/// The default public registry host.
pub const DEFAULT_REGISTRY_HOST: &str = "registry.hub.docker.com";

/// Working directory inside the build container.
pub const WORKSPACE_DIR: &str = "/workspace";

/// Name of the volume that backs `$HOME` across build steps.
pub const HOME_VOLUME_NAME: &str = "home";

/// Working directory to start at inside the home volume.
pub const HOME_WORKING_DIR: &str = "/builder/home";

/// Immutable table of build-environment constants.
///
/// Constructed once per process via [`EnvironmentDefaults::default`] and
/// shared read-only; the assembler copies it into every [`RenderContext`]
/// it produces.
///
/// [`RenderContext`]: crate::render::RenderContext
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentDefaults {
    /// Synthetic "no base image" identifier ([`NO_BASE_IMAGE_SPECIFIER`]).
    pub no_base_image_specifier: String,

    /// Default public registry host ([`DEFAULT_REGISTRY_HOST`]).
    pub default_registry_host: String,

    /// In-container workspace directory ([`WORKSPACE_DIR`]).
    pub workspace_dir: String,

    /// Name of the `$HOME` volume ([`HOME_VOLUME_NAME`]).
    pub home_volume_name: String,

    /// Starting working directory within the home volume ([`HOME_WORKING_DIR`]).
    pub home_working_dir: String,

    /// Whether the build container is removed after execution.
    /// Always true in the default profile.
    pub remove_container_after_run: bool,
}

impl Default for EnvironmentDefaults {
    fn default() -> Self {
        Self {
            no_base_image_specifier: NO_BASE_IMAGE_SPECIFIER.to_string(),
            default_registry_host: DEFAULT_REGISTRY_HOST.to_string(),
            workspace_dir: WORKSPACE_DIR.to_string(),
            home_volume_name: HOME_VOLUME_NAME.to_string(),
            home_working_dir: HOME_WORKING_DIR.to_string(),
            remove_container_after_run: true,
        }
    }
}
