//! List command implementation.
//!
//! `tent list` enumerates the projects that have a configuration file.

use std::fs;
use std::path::PathBuf;

use crate::context::ContextStack;
use crate::error::Result;
use crate::ui::TentTheme;

use super::dispatcher::CommandResult;

/// Print the configured project names, sorted.
pub fn run(ctx: &ContextStack) -> Result<CommandResult> {
    let config_path = PathBuf::from(ctx.get_str("config_path")?);
    let theme = TentTheme::new();

    let mut names = Vec::new();
    if config_path.is_dir() {
        for entry in fs::read_dir(&config_path)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("yml") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
    }
    names.sort();

    println!("{}", theme.header.apply_to("Configured projects:"));
    if names.is_empty() {
        println!(
            "    {}",
            theme
                .dim
                .apply_to("(none yet; create one with `tent edit <name>`)")
        );
    }
    for name in names {
        println!("    {}", theme.highlight.apply_to(name));
    }

    Ok(CommandResult::success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::binding;

    #[test]
    fn run_succeeds_for_a_missing_config_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let ghost = dir.path().join("ghost");
        let ctx = ContextStack::new(binding("config_path", ghost.display().to_string()));
        let result = run(&ctx).unwrap();
        assert!(result.success);
    }

    #[test]
    fn run_succeeds_with_projects_present() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("acme.yml"), "session_name: acme\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a project").unwrap();
        let ctx = ContextStack::new(binding("config_path", dir.path().display().to_string()));
        let result = run(&ctx).unwrap();
        assert!(result.success);
    }
}
