//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgAction, Parser};

use crate::report::OutputFormat;

/// has - checks presence of various command line tools.
#[derive(Debug, Parser)]
#[command(name = "has")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Examples:\n  has git curl node\n  has -v\n  has --help")]
pub struct Cli {
    /// Commands or shell builtins to look for
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Per-probe timeout in milliseconds
    #[arg(
        long = "timeout",
        value_name = "MS",
        default_value_t = 2000,
        value_parser = clap::value_parser!(u64).range(1..=3_600_000)
    )]
    pub timeout_ms: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Per-probe timeout as a `Duration`.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}
