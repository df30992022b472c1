//! Command dispatching.
//!
//! One invocation performs exactly one lifecycle operation. The dispatcher
//! computes the project's configuration file path, loads the configuration
//! where the operation requires it, and runs the operation inside a scoped
//! context overlay seeded from the loaded file.

use std::path::PathBuf;

use crate::cli::args::Invocation;
use crate::config;
use crate::context::{binding, ContextStack};
use crate::error::Result;
use crate::template;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatch and execute one lifecycle operation.
pub fn dispatch(invocation: &Invocation, ctx: &mut ContextStack) -> Result<CommandResult> {
    tracing::debug!(?invocation, "dispatching");

    match invocation {
        Invocation::List => super::list::run(ctx),
        Invocation::Edit { project_name } => {
            // Edit needs only the computed path, not the parsed contents.
            let config_file = config_file_path(ctx, project_name)?;
            super::edit::run(ctx, project_name, &config_file)
        }
        Invocation::Start { project_name } => {
            with_project_config(ctx, project_name, |ctx| super::start::run(ctx))
        }
        Invocation::Rebuild { project_name } => {
            with_project_config(ctx, project_name, |ctx| super::rebuild::run(ctx))
        }
        Invocation::Delete {
            project_name,
            assume_yes,
        } => {
            let assume_yes = *assume_yes;
            with_project_config(ctx, project_name, move |ctx| {
                super::delete::run(ctx, assume_yes)
            })
        }
    }
}

/// The project's configuration file lives at
/// `{config_path}/{project_name}.yml`.
pub fn config_file_path(ctx: &ContextStack, project_name: &str) -> Result<PathBuf> {
    let rendered = template::resolve(
        "{config_path}/{project_name}.yml",
        ctx,
        &binding("project_name", project_name),
    )?;
    Ok(PathBuf::from(rendered))
}

/// Load the project configuration and run `f` inside a context overlay
/// seeded from it. Loader errors propagate untouched.
fn with_project_config<T>(
    ctx: &mut ContextStack,
    project_name: &str,
    f: impl FnOnce(&mut ContextStack) -> Result<T>,
) -> Result<T> {
    let config_file = config_file_path(ctx, project_name)?;
    let config = config::load_project_config(&config_file)?;
    let overlay = config.context_overlay(project_name, &config_file, ctx)?;
    ctx.scoped(overlay, f)
}
