//! `has` CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use has::cli::{run, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the report. Level is
/// controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("has=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("has=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("has starting with args: {:?}", cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(&cli, &mut out) {
        Ok(summary) => {
            tracing::debug!(
                "{} found, {} missing",
                summary.found,
                summary.missing
            );
            ExitCode::from(summary.exit_code())
        }
        Err(e) => {
            let _ = out.flush();
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
