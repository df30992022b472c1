//! Rebuild command implementation.
//!
//! `tent rebuild <name>` deletes the project's virtualenv and builds a
//! fresh one with the configured interpreter.

use crate::context::ContextStack;
use crate::error::Result;
use crate::ui;
use crate::virtualenv;

use super::dispatcher::CommandResult;

pub fn run(ctx: &ContextStack) -> Result<CommandResult> {
    if !ctx.get_bool("virtualenv_configured")? {
        ui::print_error(&format!(
            "Project '{}' has no virtualenv block in its configuration; nothing to rebuild.",
            ctx.get_str("project_name")?
        ));
        return Ok(CommandResult::failure(1));
    }

    virtualenv::remove(ctx)?;

    let built = virtualenv::build(ctx)?;
    if built.ok {
        ui::print_success(&format!(
            "Rebuilt virtualenv at {}",
            ctx.get_str("virtualenv_path")?
        ));
        Ok(CommandResult::success())
    } else {
        ui::print_error(&format!(
            "virtualenv failed:\n{}",
            built.output.trim_end()
        ));
        Ok(CommandResult::failure(1))
    }
}
