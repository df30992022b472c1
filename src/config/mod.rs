//! Configuration loading, parsing, and the context overlay it seeds.
//!
//! One declarative YAML file per project lives in the configuration
//! directory. [`loader`] finds and parses it; [`schema`] defines the typed
//! structure and flattens a parsed file into the context overlay a
//! lifecycle operation runs under.

pub mod loader;
pub mod schema;

pub use loader::{
    default_config_dir, default_virtualenvs_dir, expand_tilde, load_project_config, parse_config,
    write_starter_config,
};
pub use schema::{ProjectConfig, VirtualenvConfig, WindowConfig};
