//! Start command implementation.
//!
//! `tent <name>` brings the project's tmux session up and attaches to it.
//! If the session already exists the command only attaches; otherwise it
//! builds the session window by window. Each shell-out reports success as
//! a value, so one failed window is reported and skipped while the rest of
//! the session still builds.

use crate::context::{binding, Bindings, ContextStack, Value};
use crate::error::{Result, TentError};
use crate::runner;
use crate::template;
use crate::ui::{self, TentTheme};
use crate::virtualenv;

use super::dispatcher::CommandResult;

pub fn run(ctx: &mut ContextStack) -> Result<CommandResult> {
    if ctx.get_bool("virtualenv_configured")? && !virtualenv::exists(ctx)? {
        let built = virtualenv::build(ctx)?;
        if !built.ok {
            ui::print_error(&format!(
                "Could not build the virtualenv:\n{}",
                built.output.trim_end()
            ));
            return Ok(CommandResult::failure(1));
        }
    }

    let probe = runner::run(
        ctx,
        "{tmux_command} has-session -t {session_name}",
        &Bindings::new(),
    )?;
    if probe.ok {
        let theme = TentTheme::new();
        println!(
            "{}",
            theme.dim.apply_to("Session already running; attaching.")
        );
    } else if let Some(failure) = build_session(ctx)? {
        return Ok(failure);
    }

    let attached = runner::run_interactive(
        ctx,
        "{tmux_command} attach-session -t {session_name}",
        &Bindings::new(),
    )?;
    if attached {
        Ok(CommandResult::success())
    } else {
        ui::print_error("Could not attach to the session.");
        Ok(CommandResult::failure(1))
    }
}

/// Create the session, its environment, and its windows. Returns a failure
/// result if the session itself could not be created; window-level
/// problems are reported and skipped.
fn build_session(ctx: &mut ContextStack) -> Result<Option<CommandResult>> {
    let created = if ctx.contains("project_root") {
        runner::run(
            ctx,
            "{tmux_command} new-session -d -s {session_name} -c {project_root}",
            &Bindings::new(),
        )?
    } else {
        runner::run(
            ctx,
            "{tmux_command} new-session -d -s {session_name}",
            &Bindings::new(),
        )?
    };
    if !created.ok {
        ui::print_error(&format!(
            "Could not create the session:\n{}",
            created.output.trim_end()
        ));
        return Ok(Some(CommandResult::failure(1)));
    }

    for (name, value) in ctx.get_map("environment")?.clone() {
        let mut extra = binding("env_name", name.as_str());
        extra.insert("env_value".to_string(), value);
        let set = runner::run(
            ctx,
            "{tmux_command} set-environment -t {session_name} {env_name} {env_value}",
            &extra,
        )?;
        if !set.ok {
            ui::print_warning(&format!(
                "Could not set environment variable '{}': {}",
                name,
                set.output.trim()
            ));
        }
    }

    let windows = ctx.get_seq("windows")?.to_vec();
    let mut first_window_name = None;
    for (index, window) in windows.iter().enumerate() {
        let overlay = window_overlay(index, window)?;
        let window_name = overlay["window_name"].to_string();
        if index == 0 {
            first_window_name = Some(window_name.clone());
        }
        ctx.scoped(overlay, |ctx| build_window(ctx, index, &window_name))?;
    }

    if let Some(first) = first_window_name {
        let selected = runner::run(
            ctx,
            "{tmux_command} select-window -t {session_name}:{window_name}",
            &binding("window_name", first),
        )?;
        if !selected.ok {
            ui::print_warning(&format!(
                "Could not select the first window: {}",
                selected.output.trim()
            ));
        }
    }

    Ok(None)
}

/// Set up one window inside its context overlay.
fn build_window(ctx: &mut ContextStack, index: usize, window_name: &str) -> Result<()> {
    // The session's default window is renamed in place; later windows are
    // created fresh.
    let placed = if index == 0 {
        runner::run(
            ctx,
            "{tmux_command} rename-window -t {session_name} {window_name}",
            &Bindings::new(),
        )?
    } else {
        runner::run(
            ctx,
            "{tmux_command} new-window -t {session_name} -n {window_name}",
            &Bindings::new(),
        )?
    };
    if !placed.ok {
        ui::print_warning(&format!(
            "Skipping window '{}': {}",
            window_name,
            placed.output.trim()
        ));
        return Ok(());
    }

    if ctx.contains("window_layout") {
        let laid = runner::run(
            ctx,
            "{tmux_command} select-layout -t {session_name}:{window_name} {window_layout}",
            &Bindings::new(),
        )?;
        if !laid.ok {
            ui::print_warning(&format!(
                "Could not apply layout to '{}': {}",
                window_name,
                laid.output.trim()
            ));
        }
    }

    if ctx.contains("project_root") {
        send_line(ctx, "cd {project_root}")?;
    }
    if ctx.get_bool("virtualenv_configured")? {
        send_line(ctx, "source {virtualenv_path}/bin/activate")?;
    }
    if ctx.contains("window_command") {
        send_line(ctx, "{window_command}")?;
    }

    Ok(())
}

/// Type one line into the current window and press Enter.
///
/// The line is resolved first and passed back in as a single binding, so
/// its spaces survive the runner's token split as one send-keys argument.
fn send_line(ctx: &ContextStack, line_template: &str) -> Result<()> {
    let line = template::resolve(line_template, ctx, &Bindings::new())?;
    let sent = runner::run(
        ctx,
        "{tmux_command} send-keys -t {session_name}:{window_name} {line} Enter",
        &binding("line", line.clone()),
    )?;
    if !sent.ok {
        ui::print_warning(&format!(
            "Could not send '{}': {}",
            line,
            sent.output.trim()
        ));
    }
    Ok(())
}

/// Context overlay for one window definition.
fn window_overlay(index: usize, window: &Value) -> Result<Bindings> {
    let Value::Map(fields) = window else {
        return Err(TentError::ContextType {
            key: "windows".to_string(),
            expected: "sequence of mappings",
        });
    };

    let mut overlay = Bindings::new();
    let name = fields
        .get("name")
        .map(|v| v.to_string())
        .unwrap_or_else(|| format!("win{}", index));
    overlay.insert("window_name".to_string(), Value::str(name));
    if let Some(command) = fields.get("command") {
        overlay.insert("window_command".to_string(), command.clone());
    }
    if let Some(layout) = fields.get("layout") {
        overlay.insert("window_layout".to_string(), layout.clone());
    }
    Ok(overlay)
}
