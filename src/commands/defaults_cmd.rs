//! Implementation of the `taskrender defaults` command.
//!
//! Prints the fixed build-environment defaults table.

use crate::defaults::EnvironmentDefaults;
use crate::error::Result;

/// Execute the `taskrender defaults` command.
pub fn cmd_defaults() -> Result<()> {
    let defaults = EnvironmentDefaults::default();

    println!("Build environment defaults:");
    println!();
    println!("  No base image:     {}", defaults.no_base_image_specifier);
    println!("  Default registry:  {}", defaults.default_registry_host);
    println!("  Workspace dir:     {}", defaults.workspace_dir);
    println!("  Home volume:       {}", defaults.home_volume_name);
    println!("  Home working dir:  {}", defaults.home_working_dir);
    println!(
        "  Remove container:  {}",
        defaults.remove_container_after_run
    );

    Ok(())
}
