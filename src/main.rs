//! Tent CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tent::cli::{dispatch, Cli, Invocation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tent=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tent=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("tent starting with args: {:?}", cli);

    let invocation = match Invocation::from_cli(&cli.command) {
        Ok(invocation) => invocation,
        Err(message) => {
            // A bare project name followed by extra arguments; reject with
            // the parser's usage message.
            let mut cmd = Cli::command();
            cmd.error(clap::error::ErrorKind::TooManyValues, message).exit()
        }
    };

    let mut ctx = cli.base_context();

    match dispatch(&invocation, &mut ctx) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            tent::ui::print_error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
