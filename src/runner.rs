//! Templated subprocess execution.
//!
//! A command line is split on single spaces, each token is expanded
//! against the context, and the result is run as a child process. There is
//! no quoting or escaping: an argument containing a literal space cannot
//! be written directly. A single `{placeholder}` token whose bound value
//! contains spaces still travels as one argument, because substitution
//! happens after splitting.
//!
//! A child that exits non-zero is a *result*, not an error: callers chain
//! several shell-outs and decide per step whether to continue. Only an
//! unresolvable template or an executable that cannot be spawned surfaces
//! on the error channel.

use std::process::{Command, Stdio};

use crate::context::{Bindings, ContextStack};
use crate::error::{Result, TentError};
use crate::template;

/// Outcome of a captured command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the child exited with status zero.
    pub ok: bool,

    /// Captured stdout on success, captured stderr on failure.
    pub output: String,
}

/// Resolve and execute a templated command line, capturing output.
///
/// Prints a `* <resolved command>` trace line to stdout before executing,
/// then blocks until the child exits. There is no timeout: a hung child
/// hangs the tool.
pub fn run(ctx: &ContextStack, command_line: &str, extra: &Bindings) -> Result<CommandOutput> {
    let argv = resolve_argv(ctx, command_line, extra)?;
    println!("* {}", argv.join(" "));
    tracing::debug!(command = %argv.join(" "), "running");

    let (program, args) = split_program(&argv)?;
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| TentError::CommandUnlaunchable {
            command: program.to_string(),
            source,
        })?;

    if output.status.success() {
        Ok(CommandOutput {
            ok: true,
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    } else {
        tracing::debug!(code = ?output.status.code(), "command exited non-zero");
        Ok(CommandOutput {
            ok: false,
            output: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Resolve and execute a templated command line with inherited stdio.
///
/// Used for commands that take over the terminal (`tmux attach-session`,
/// the editor). Returns whether the child exited with status zero.
pub fn run_interactive(ctx: &ContextStack, command_line: &str, extra: &Bindings) -> Result<bool> {
    let argv = resolve_argv(ctx, command_line, extra)?;
    println!("* {}", argv.join(" "));
    tracing::debug!(command = %argv.join(" "), "running interactively");

    let (program, args) = split_program(&argv)?;
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| TentError::CommandUnlaunchable {
            command: program.to_string(),
            source,
        })?;

    Ok(status.success())
}

/// Split on single spaces, then resolve each token independently.
fn resolve_argv(ctx: &ContextStack, command_line: &str, extra: &Bindings) -> Result<Vec<String>> {
    command_line
        .split(' ')
        .map(|token| template::resolve(token, ctx, extra))
        .collect()
}

fn split_program(argv: &[String]) -> Result<(&String, &[String])> {
    argv.split_first()
        .ok_or_else(|| TentError::Other(anyhow::anyhow!("empty command line")))
}
