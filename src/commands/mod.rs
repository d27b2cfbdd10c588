//! Command implementations for taskrender.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod defaults_cmd;
mod render_cmd;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render_cmd::cmd_render(args),
        Command::Defaults => defaults_cmd::cmd_defaults(),
    }
}
