//! Tent - tmux session manager with virtualenv support.
//!
//! Tent drives tmux (and, optionally, a managed virtualenv) from one
//! declarative YAML configuration file per project. Every external command
//! is a template resolved against a scoped execution context, so the same
//! handful of primitives serve all five lifecycle operations.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, decision table, and lifecycle
//!   commands
//! - [`config`] - Project configuration schema and loading
//! - [`context`] - The execution context stack and scoped overlays
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Templated subprocess execution
//! - [`template`] - `{name}` placeholder expansion
//! - [`ui`] - Terminal output styling
//! - [`virtualenv`] - Managed virtualenv helpers
//!
//! # Example
//!
//! ```
//! use tent::context::{binding, ContextStack};
//! use tent::template::resolve;
//!
//! let ctx = ContextStack::new(binding("session_name", "acme"));
//! let line = resolve("tmux attach -t {session_name}", &ctx, &Default::default()).unwrap();
//! assert_eq!(line, "tmux attach -t acme");
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod runner;
pub mod template;
pub mod ui;
pub mod virtualenv;

pub use error::{Result, TentError};
