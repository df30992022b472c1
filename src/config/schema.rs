//! Project configuration schema.
//!
//! One YAML file per project under the configuration directory, named
//! `<project>.yml`:
//!
//! ```yaml
//! session_name: acme
//! project_root: ~/src/acme
//! environment:
//!   RAILS_ENV: development
//! virtualenv:
//!   python: python3
//!   site_packages: false
//! windows:
//!   - name: editor
//!     command: vim .
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::loader::expand_tilde;
use crate::context::{Bindings, ContextStack, Value};
use crate::error::Result;

/// Root configuration structure for a project file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Tmux session name. Required in practice; omitting it surfaces as a
    /// missing `{session_name}` binding when a command first needs it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,

    /// Directory the session starts in. `~` is expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<String>,

    /// Environment variables set on the session.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,

    /// Windows created in the session, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<WindowConfig>,

    /// Presence of this block opts the project into a managed virtualenv.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtualenv: Option<VirtualenvConfig>,
}

/// One window definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Command typed into the window after setup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Tmux layout applied to the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

/// Virtualenv settings for a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualenvConfig {
    /// Interpreter binary used to seed the virtualenv.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Whether the virtualenv sees the system site-packages.
    pub site_packages: bool,
}

impl ProjectConfig {
    /// Flatten this configuration into the context overlay installed for
    /// the duration of a lifecycle operation.
    pub fn context_overlay(
        &self,
        project_name: &str,
        config_file: &Path,
        ctx: &ContextStack,
    ) -> Result<Bindings> {
        let mut overlay = Bindings::new();
        overlay.insert("project_name".to_string(), Value::str(project_name));
        overlay.insert(
            "config_file_name".to_string(),
            Value::str(config_file.display().to_string()),
        );

        if let Some(session_name) = &self.session_name {
            overlay.insert("session_name".to_string(), Value::str(session_name));
        }
        if let Some(project_root) = &self.project_root {
            overlay.insert(
                "project_root".to_string(),
                Value::str(expand_tilde(project_root).display().to_string()),
            );
        }

        let environment = self
            .environment
            .iter()
            .map(|(key, value)| (key.clone(), Value::str(value)))
            .collect();
        overlay.insert("environment".to_string(), Value::Map(environment));

        let windows = self
            .windows
            .iter()
            .map(|window| {
                let mut fields = BTreeMap::new();
                if let Some(name) = &window.name {
                    fields.insert("name".to_string(), Value::str(name));
                }
                if let Some(command) = &window.command {
                    fields.insert("command".to_string(), Value::str(command));
                }
                if let Some(layout) = &window.layout {
                    fields.insert("layout".to_string(), Value::str(layout));
                }
                Value::Map(fields)
            })
            .collect();
        overlay.insert("windows".to_string(), Value::Seq(windows));

        if let Some(virtualenv) = &self.virtualenv {
            let virtualenvs_path = ctx.get_str("virtualenvs_path")?;
            let virtualenv_path = Path::new(virtualenvs_path).join(project_name);
            overlay.insert("virtualenv_configured".to_string(), Value::Bool(true));
            overlay.insert(
                "virtualenv_path".to_string(),
                Value::str(virtualenv_path.display().to_string()),
            );
            overlay.insert(
                "virtualenv_python_binary".to_string(),
                Value::str(virtualenv.python.as_deref().unwrap_or("python")),
            );
            overlay.insert(
                "virtualenv_use_site_packages".to_string(),
                Value::str(if virtualenv.site_packages {
                    "--system-site-packages"
                } else {
                    "--no-site-packages"
                }),
            );
        }

        Ok(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::binding;
    use std::path::PathBuf;

    fn base_ctx() -> ContextStack {
        ContextStack::new(binding("virtualenvs_path", "/home/x/.virtualenvs"))
    }

    fn parse(yaml: &str) -> ProjectConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn minimal_config_parses() {
        let config = parse("session_name: acme\n");
        assert_eq!(config.session_name.as_deref(), Some("acme"));
        assert!(config.windows.is_empty());
        assert!(config.virtualenv.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config = parse(
            r#"
session_name: acme
project_root: /src/acme
environment:
  RAILS_ENV: development
virtualenv:
  python: python3
  site_packages: true
windows:
  - name: editor
    command: vim .
    layout: main-vertical
  - name: shell
"#,
        );
        assert_eq!(config.environment["RAILS_ENV"], "development");
        assert_eq!(config.windows.len(), 2);
        assert_eq!(config.windows[0].layout.as_deref(), Some("main-vertical"));
        assert!(config.windows[1].command.is_none());
        let venv = config.virtualenv.unwrap();
        assert_eq!(venv.python.as_deref(), Some("python3"));
        assert!(venv.site_packages);
    }

    #[test]
    fn overlay_carries_identity_and_session_keys() {
        let config = parse("session_name: acme\nproject_root: /src/acme\n");
        let overlay = config
            .context_overlay("acme", &PathBuf::from("/cfg/acme.yml"), &base_ctx())
            .unwrap();
        assert_eq!(overlay["project_name"], Value::str("acme"));
        assert_eq!(overlay["config_file_name"], Value::str("/cfg/acme.yml"));
        assert_eq!(overlay["session_name"], Value::str("acme"));
        assert_eq!(overlay["project_root"], Value::str("/src/acme"));
        assert!(!overlay.contains_key("virtualenv_configured"));
    }

    #[test]
    fn overlay_derives_virtualenv_keys() {
        let config = parse("session_name: acme\nvirtualenv:\n  python: python3\n");
        let overlay = config
            .context_overlay("acme", &PathBuf::from("/cfg/acme.yml"), &base_ctx())
            .unwrap();
        assert_eq!(overlay["virtualenv_configured"], Value::Bool(true));
        assert_eq!(
            overlay["virtualenv_path"],
            Value::str("/home/x/.virtualenvs/acme")
        );
        assert_eq!(overlay["virtualenv_python_binary"], Value::str("python3"));
        assert_eq!(
            overlay["virtualenv_use_site_packages"],
            Value::str("--no-site-packages")
        );
    }

    #[test]
    fn overlay_site_packages_flag_flips() {
        let config = parse("virtualenv:\n  site_packages: true\n");
        let overlay = config
            .context_overlay("acme", &PathBuf::from("/cfg/acme.yml"), &base_ctx())
            .unwrap();
        assert_eq!(
            overlay["virtualenv_use_site_packages"],
            Value::str("--system-site-packages")
        );
    }

    #[test]
    fn overlay_preserves_window_order() {
        let config = parse(
            "windows:\n  - name: one\n  - name: two\n  - name: three\n",
        );
        let overlay = config
            .context_overlay("acme", &PathBuf::from("/cfg/acme.yml"), &base_ctx())
            .unwrap();
        let Value::Seq(windows) = &overlay["windows"] else {
            panic!("windows should be a sequence");
        };
        let names: Vec<String> = windows
            .iter()
            .map(|w| match w {
                Value::Map(fields) => fields["name"].to_string(),
                other => panic!("unexpected window shape: {other:?}"),
            })
            .collect();
        assert_eq!(names, ["one", "two", "three"]);
    }
}
