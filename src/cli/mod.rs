//! Command-line interface: argument definitions, the invocation decision
//! table, and the lifecycle commands.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, Invocation};
pub use commands::{dispatch, CommandResult};
