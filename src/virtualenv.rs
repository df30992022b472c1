//! Managed virtualenv helpers shared by start, rebuild, and delete.

use std::fs;
use std::path::Path;

use crate::context::{Bindings, ContextStack};
use crate::error::Result;
use crate::runner::{self, CommandOutput};

/// Whether the project's virtualenv directory exists.
pub fn exists(ctx: &ContextStack) -> Result<bool> {
    Ok(Path::new(ctx.get_str("virtualenv_path")?).exists())
}

/// Build the project's virtualenv with the configured interpreter.
///
/// Non-zero exit from `virtualenv` is reported through the returned
/// [`CommandOutput`], not the error channel.
pub fn build(ctx: &ContextStack) -> Result<CommandOutput> {
    runner::run(
        ctx,
        "virtualenv {virtualenv_use_site_packages} -p {virtualenv_python_binary} {virtualenv_path}",
        &Bindings::new(),
    )
}

/// Remove the project's virtualenv directory if it exists.
pub fn remove(ctx: &ContextStack) -> Result<()> {
    let path = Path::new(ctx.get_str("virtualenv_path")?);
    if path.exists() {
        tracing::debug!(path = %path.display(), "removing virtualenv");
        fs::remove_dir_all(path)?;
    }
    Ok(())
}
