//! Project configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ProjectConfig;
use crate::error::{Result, TentError};

/// Default configuration directory: `~/.tent`.
pub fn default_config_dir() -> PathBuf {
    home().join(".tent")
}

/// Default virtualenv home: `~/.virtualenvs` (virtualenvwrapper's default).
pub fn default_virtualenvs_dir() -> PathBuf {
    home().join(".virtualenvs")
}

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Expand a leading `~` or `~/` against the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return home();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return home().join(rest);
    }
    PathBuf::from(path)
}

/// Load and parse a project configuration file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_project_config(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TentError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TentError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ProjectConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    serde_yaml::from_str(content).map_err(|e| TentError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write the commented starter configuration `tent edit` seeds a new
/// project with. Creates the configuration directory if needed.
pub fn write_starter_config(path: &Path, project_name: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, starter_config(project_name))?;
    Ok(())
}

fn starter_config(project_name: &str) -> String {
    format!(
        r#"# tent project configuration.
#
# Only session_name is required; remove the sections you do not need.

session_name: {project_name}

# Directory the session starts in. ~ is expanded.
# project_root: ~/src/{project_name}

# Environment variables set on the session.
# environment:
#   KEY: value

# Presence of this block gives the project a managed virtualenv at
# <virtualenvs dir>/{project_name}.
# virtualenv:
#   python: python3
#   site_packages: false

windows:
  - name: editor
    command: vim .
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_config_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_project_config(&dir.path().join("ghost.yml"));
        assert!(matches!(result, Err(TentError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "windows: {not: [valid").unwrap();
        let result = load_project_config(&path);
        assert!(matches!(result, Err(TentError::ConfigParseError { .. })));
    }

    #[test]
    fn load_round_trips_a_written_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("acme.yml");
        fs::write(&path, "session_name: acme\n").unwrap();
        let config = load_project_config(&path).unwrap();
        assert_eq!(config.session_name.as_deref(), Some("acme"));
    }

    #[test]
    fn starter_config_parses_and_names_the_session() {
        let content = starter_config("acme");
        let config = parse_config(&content, Path::new("acme.yml")).unwrap();
        assert_eq!(config.session_name.as_deref(), Some("acme"));
        assert_eq!(config.windows.len(), 1);
        assert!(config.virtualenv.is_none());
    }

    #[test]
    fn write_starter_config_creates_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("acme.yml");
        write_starter_config(&path, "acme").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn expand_tilde_rewrites_home_prefix() {
        let expanded = expand_tilde("~/src/acme");
        assert!(expanded.ends_with("src/acme"));
        assert!(!expanded.starts_with("~"));
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }
}
