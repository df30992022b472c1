//! Error types for tent operations.
//!
//! This module defines [`TentError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TentError` for fatal, caller-bug-class failures: an unresolvable
//!   template, an unlaunchable executable, a broken configuration file
//! - A child process exiting non-zero is NOT an error here; it is reported
//!   as a value by the command runner so callers can decide per step
//!   whether to continue
//! - Use `anyhow::Error` (via `TentError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tent operations.
#[derive(Debug, Error)]
pub enum TentError {
    /// A template placeholder has no binding in the combined context.
    #[error("No binding for placeholder {{{name}}}")]
    MissingBinding { name: String },

    /// A template string is malformed (unterminated placeholder).
    #[error("Malformed template: {message}")]
    TemplateSyntax { message: String },

    /// The resolved executable could not be spawned at all.
    #[error("Could not launch '{command}': {source}")]
    CommandUnlaunchable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Project configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A context value exists but has the wrong shape for the caller.
    #[error("Context key '{key}' is not a {expected}")]
    ContextType { key: String, expected: &'static str },

    /// No editor is configured for `tent edit`.
    #[error("No editor configured; set $EDITOR")]
    EditorNotConfigured,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tent operations.
pub type Result<T> = std::result::Result<T, TentError>;
