//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros, plus
//! the [`Invocation`] decision table that normalizes a parsed command line
//! into exactly one lifecycle operation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{default_config_dir, default_virtualenvs_dir};
use crate::context::{Bindings, ContextStack, Value};

/// Tent - tmux session manager with virtualenv support.
#[derive(Debug, Parser)]
#[command(name = "tent")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory holding per-project configuration files
    #[arg(long, global = true, env = "TENT_CONFIGS", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory holding virtualenvs
    #[arg(long, global = true, env = "TENT_VIRTUALENVS", value_name = "DIR")]
    pub virtualenvs_dir: Option<PathBuf>,

    /// Multiplexer executable to drive
    #[arg(long, global = true, env = "TENT_TMUX_COMMAND", value_name = "CMD")]
    pub tmux: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands. A bare project name (`tent myproject`) is
/// captured by the `Start` variant.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List configured projects
    List,

    /// Edit a project's configuration, creating it first if needed
    Edit { project_name: String },

    /// Delete an existing virtualenv and build a fresh one
    Rebuild { project_name: String },

    /// Delete a project's virtualenv and configuration
    Delete {
        project_name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Start or attach the named project's session
    #[command(external_subcommand)]
    Start(Vec<String>),
}

impl Cli {
    /// Build the base context from flags and environment, once per process.
    pub fn base_context(&self) -> ContextStack {
        let mut base = Bindings::new();

        if let Ok(editor) = std::env::var("EDITOR") {
            if !editor.is_empty() {
                base.insert("editor".to_string(), Value::str(editor));
            }
        }

        let config_dir = self
            .config_dir
            .clone()
            .unwrap_or_else(default_config_dir);
        base.insert(
            "config_path".to_string(),
            Value::str(config_dir.display().to_string()),
        );

        let virtualenvs_dir = self
            .virtualenvs_dir
            .clone()
            .unwrap_or_else(default_virtualenvs_dir);
        base.insert(
            "virtualenvs_path".to_string(),
            Value::str(virtualenvs_dir.display().to_string()),
        );

        base.insert(
            "tmux_command".to_string(),
            Value::str(self.tmux.as_deref().unwrap_or("tmux")),
        );

        // Per-project defaults, replaced by the config overlay.
        base.insert("virtualenv_configured".to_string(), Value::Bool(false));
        base.insert(
            "virtualenv_use_site_packages".to_string(),
            Value::str("--no-site-packages"),
        );
        base.insert("environment".to_string(), Value::Map(BTreeMap::new()));
        base.insert("windows".to_string(), Value::Seq(Vec::new()));

        ContextStack::new(base)
    }
}

/// The resolved lifecycle operation for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    List,
    Start { project_name: String },
    Edit { project_name: String },
    Rebuild { project_name: String },
    Delete { project_name: String, assume_yes: bool },
}

impl Invocation {
    /// Normalize a parsed command line into one lifecycle operation.
    ///
    /// A single bare argument is a project name to start; `list` is caught
    /// by its own subcommand before reaching the bare-argument case. A bare
    /// argument followed by anything else is rejected with the returned
    /// usage message.
    pub fn from_cli(command: &Commands) -> std::result::Result<Self, String> {
        match command {
            Commands::List => Ok(Invocation::List),
            Commands::Edit { project_name } => Ok(Invocation::Edit {
                project_name: project_name.clone(),
            }),
            Commands::Rebuild { project_name } => Ok(Invocation::Rebuild {
                project_name: project_name.clone(),
            }),
            Commands::Delete { project_name, yes } => Ok(Invocation::Delete {
                project_name: project_name.clone(),
                assume_yes: *yes,
            }),
            Commands::Start(args) => match args.as_slice() {
                [project_name] => Ok(Invocation::Start {
                    project_name: project_name.clone(),
                }),
                _ => Err(format!(
                    "expected a single project name, got '{}'",
                    args.join(" ")
                )),
            },
        }
    }

    /// Whether the dispatcher must load the project configuration before
    /// running this operation.
    pub fn requires_config(&self) -> bool {
        matches!(
            self,
            Invocation::Start { .. } | Invocation::Rebuild { .. } | Invocation::Delete { .. }
        )
    }

    /// The project this operation acts on, if any.
    pub fn project_name(&self) -> Option<&str> {
        match self {
            Invocation::List => None,
            Invocation::Start { project_name }
            | Invocation::Edit { project_name }
            | Invocation::Rebuild { project_name }
            | Invocation::Delete { project_name, .. } => Some(project_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Commands {
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn bare_list_resolves_to_list() {
        let invocation = Invocation::from_cli(&parse(&["tent", "list"])).unwrap();
        assert_eq!(invocation, Invocation::List);
        assert!(!invocation.requires_config());
        assert!(invocation.project_name().is_none());
    }

    #[test]
    fn bare_project_name_resolves_to_start() {
        let invocation = Invocation::from_cli(&parse(&["tent", "myproj"])).unwrap();
        assert_eq!(
            invocation,
            Invocation::Start {
                project_name: "myproj".into()
            }
        );
        assert!(invocation.requires_config());
        assert_eq!(invocation.project_name(), Some("myproj"));
    }

    #[test]
    fn edit_needs_no_config_load() {
        let invocation = Invocation::from_cli(&parse(&["tent", "edit", "myproj"])).unwrap();
        assert_eq!(
            invocation,
            Invocation::Edit {
                project_name: "myproj".into()
            }
        );
        assert!(!invocation.requires_config());
    }

    #[test]
    fn rebuild_and_delete_load_config() {
        let rebuild = Invocation::from_cli(&parse(&["tent", "rebuild", "myproj"])).unwrap();
        assert!(rebuild.requires_config());

        let delete = Invocation::from_cli(&parse(&["tent", "delete", "--yes", "myproj"])).unwrap();
        assert_eq!(
            delete,
            Invocation::Delete {
                project_name: "myproj".into(),
                assume_yes: true
            }
        );
        assert!(delete.requires_config());
    }

    #[test]
    fn trailing_arguments_after_a_bare_name_are_rejected() {
        let result = Invocation::from_cli(&parse(&["tent", "myproj", "extra"]));
        assert!(result.is_err());
    }

    #[test]
    fn subcommands_require_a_project_name() {
        assert!(Cli::try_parse_from(["tent", "edit"]).is_err());
        assert!(Cli::try_parse_from(["tent", "rebuild"]).is_err());
        assert!(Cli::try_parse_from(["tent", "delete"]).is_err());
    }

    #[test]
    fn base_context_prefers_flags_over_defaults() {
        let cli = Cli::try_parse_from([
            "tent",
            "--config-dir",
            "/cfg",
            "--virtualenvs-dir",
            "/venvs",
            "--tmux",
            "tmux-3.4",
            "list",
        ])
        .unwrap();
        let ctx = cli.base_context();
        assert_eq!(ctx.get_str("config_path").unwrap(), "/cfg");
        assert_eq!(ctx.get_str("virtualenvs_path").unwrap(), "/venvs");
        assert_eq!(ctx.get_str("tmux_command").unwrap(), "tmux-3.4");
        assert!(!ctx.get_bool("virtualenv_configured").unwrap());
        assert!(ctx.get_seq("windows").unwrap().is_empty());
    }

    #[test]
    fn base_context_defaults_the_tmux_command() {
        std::env::remove_var("TENT_TMUX_COMMAND");
        let cli = Cli::try_parse_from(["tent", "list"]).unwrap();
        let ctx = cli.base_context();
        assert_eq!(ctx.get_str("tmux_command").unwrap(), "tmux");
    }
}
