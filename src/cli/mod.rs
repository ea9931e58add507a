//! Command-line interface for `has`.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Checks every requested name and writes the report

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::run;
