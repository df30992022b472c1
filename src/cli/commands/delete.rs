//! Delete command implementation.
//!
//! `tent delete <name>` removes the project's virtualenv and its
//! configuration file, after confirmation.

use std::fs;

use dialoguer::Confirm;

use crate::context::ContextStack;
use crate::error::{Result, TentError};
use crate::ui;
use crate::virtualenv;

use super::dispatcher::CommandResult;

pub fn run(ctx: &ContextStack, assume_yes: bool) -> Result<CommandResult> {
    let project_name = ctx.get_str("project_name")?;

    if !assume_yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete project '{}' (virtualenv and configuration)?",
                project_name
            ))
            .default(false)
            .interact()
            .map_err(|e| TentError::Other(anyhow::Error::new(e)))?;
        if !confirmed {
            println!("Aborted.");
            return Ok(CommandResult::failure(1));
        }
    }

    if ctx.get_bool("virtualenv_configured")? {
        virtualenv::remove(ctx)?;
    }

    fs::remove_file(ctx.get_str("config_file_name")?)?;
    ui::print_success(&format!("Deleted project '{}'.", project_name));

    Ok(CommandResult::success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{binding, Value};

    #[test]
    fn run_with_assume_yes_removes_config_and_virtualenv() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_file = dir.path().join("acme.yml");
        fs::write(&config_file, "session_name: acme\n").unwrap();
        let venv = dir.path().join("venvs").join("acme");
        fs::create_dir_all(&venv).unwrap();

        let mut base = binding("project_name", "acme");
        base.insert(
            "config_file_name".to_string(),
            Value::str(config_file.display().to_string()),
        );
        base.insert("virtualenv_configured".to_string(), Value::Bool(true));
        base.insert(
            "virtualenv_path".to_string(),
            Value::str(venv.display().to_string()),
        );
        let ctx = ContextStack::new(base);

        let result = run(&ctx, true).unwrap();
        assert!(result.success);
        assert!(!config_file.exists());
        assert!(!venv.exists());
    }

    #[test]
    fn run_leaves_the_virtualenv_alone_when_not_configured() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_file = dir.path().join("acme.yml");
        fs::write(&config_file, "session_name: acme\n").unwrap();

        let mut base = binding("project_name", "acme");
        base.insert(
            "config_file_name".to_string(),
            Value::str(config_file.display().to_string()),
        );
        base.insert("virtualenv_configured".to_string(), Value::Bool(false));
        let ctx = ContextStack::new(base);

        let result = run(&ctx, true).unwrap();
        assert!(result.success);
        assert!(!config_file.exists());
    }
}
