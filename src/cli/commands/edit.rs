//! Edit command implementation.
//!
//! `tent edit <name>` opens the project's configuration file in the
//! configured editor, seeding a new file with a commented starter first.
//! The configuration is not loaded or parsed; only the computed path is
//! needed.

use std::path::Path;

use crate::config;
use crate::context::{binding, ContextStack};
use crate::error::{Result, TentError};
use crate::runner;
use crate::ui::{self, TentTheme};

use super::dispatcher::CommandResult;

pub fn run(ctx: &ContextStack, project_name: &str, config_file: &Path) -> Result<CommandResult> {
    if ctx.get("editor").is_none() {
        return Err(TentError::EditorNotConfigured);
    }

    if !config_file.exists() {
        config::write_starter_config(config_file, project_name)?;
        let theme = TentTheme::new();
        println!(
            "{}",
            theme
                .dim
                .apply_to(format!("Created {}", config_file.display()))
        );
    }

    let opened = runner::run_interactive(
        ctx,
        "{editor} {config_file_name}",
        &binding("config_file_name", config_file.display().to_string()),
    )?;

    if opened {
        Ok(CommandResult::success())
    } else {
        ui::print_error("Editor exited with an error.");
        Ok(CommandResult::failure(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Bindings;

    #[test]
    fn run_without_an_editor_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let ctx = ContextStack::new(Bindings::new());
        let result = run(&ctx, "acme", &dir.path().join("acme.yml"));
        assert!(matches!(result, Err(TentError::EditorNotConfigured)));
    }

    #[test]
    fn run_seeds_a_starter_config_and_opens_it() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_file = dir.path().join("acme.yml");
        // `true` ignores its arguments and exits zero, standing in for a
        // real editor.
        let ctx = ContextStack::new(binding("editor", "true"));

        let result = run(&ctx, "acme", &config_file).unwrap();
        assert!(result.success);
        assert!(config_file.exists());

        let config = config::load_project_config(&config_file).unwrap();
        assert_eq!(config.session_name.as_deref(), Some("acme"));
    }

    #[test]
    fn run_reports_an_editor_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_file = dir.path().join("acme.yml");
        let ctx = ContextStack::new(binding("editor", "false"));

        let result = run(&ctx, "acme", &config_file).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }
}
